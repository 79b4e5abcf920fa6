pub mod email_check;
pub mod user_form;
pub mod validate;
