/// User-facing button labels.
pub struct ButtonText;

impl ButtonText {
    pub const LOGIN_YAHOO: &'static str = "Sign in with Yahoo";
}
