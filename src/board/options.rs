/// Knobs for how strictly a [`Board`](super::Board) enforces the claims a move makes
/// about itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleOptions {
    /// Reject moves whose check (`+`) or mate (`#`) claim disagrees with the computed
    /// check state of the opponent.
    pub validate_check_claims: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            validate_check_claims: true,
        }
    }
}

impl RuleOptions {
    pub fn lenient() -> Self {
        Self {
            validate_check_claims: false,
        }
    }
}
