pub mod login_button;
