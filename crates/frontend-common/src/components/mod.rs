mod modal;
mod otp_input;
mod spinner;

pub use modal::Modal;
pub use otp_input::OtpInput;
pub use spinner::LoadingSpinner as Spinner;
