//! Login service
//!
//! Two-step mock login: collect a phone number, then accept any 6-digit OTP.
//! No SMS is sent and no code is checked.

use crate::error::{PaisaError, PaisaResult};
use crate::models::{IncomeBracket, Language, PhoneNumber, UserProfile};

/// Number of digits in an OTP
pub const OTP_DIGITS: usize = 6;

/// Which step of the login the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStep {
    #[default]
    Phone,
    Otp,
}

/// State of an in-progress login
#[derive(Debug, Clone)]
pub struct LoginFlow {
    step: LoginStep,
    phone: Option<PhoneNumber>,
    pub language: Language,
    pub income: IncomeBracket,
}

impl LoginFlow {
    pub fn new(language: Language, income: IncomeBracket) -> Self {
        Self {
            step: LoginStep::Phone,
            phone: None,
            language,
            income,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    /// The number an OTP was "sent" to, once on the OTP step
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Whether the send-OTP action is enabled for this input
    pub fn can_send_otp(phone_input: &str) -> bool {
        PhoneNumber::parse(phone_input).is_ok()
    }

    /// Whether the verify action is enabled for this input
    pub fn can_verify(otp_input: &str) -> bool {
        let otp = otp_input.trim();
        otp.chars().count() == OTP_DIGITS && otp.chars().all(|c| c.is_ascii_digit())
    }

    /// Request an OTP for the given number and move to the OTP step
    pub fn send_otp(&mut self, phone_input: &str) -> PaisaResult<&PhoneNumber> {
        let phone = PhoneNumber::parse(phone_input)?;
        tracing::info!(phone = %phone.masked(), "OTP requested");
        self.step = LoginStep::Otp;
        Ok(&*self.phone.insert(phone))
    }

    /// Accept the OTP and produce the session profile
    pub fn verify_otp(&self, otp_input: &str) -> PaisaResult<UserProfile> {
        let phone = match (self.step, &self.phone) {
            (LoginStep::Otp, Some(phone)) => phone.clone(),
            _ => {
                return Err(PaisaError::Validation(
                    "Request an OTP before verifying".into(),
                ))
            }
        };

        if !Self::can_verify(otp_input) {
            return Err(PaisaError::Validation(format!(
                "OTP must be {} digits",
                OTP_DIGITS
            )));
        }

        tracing::info!(
            phone = %phone.masked(),
            language = %self.language,
            income = %self.income,
            "Login verified"
        );
        Ok(UserProfile::new(phone, self.language, self.income))
    }

    /// Go back to the phone step, keeping the entered choices
    pub fn change_number(&mut self) {
        self.step = LoginStep::Phone;
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new(Language::default(), IncomeBracket::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_phone_cannot_request_otp() {
        let mut flow = LoginFlow::default();
        assert!(!LoginFlow::can_send_otp("98765"));
        let err = flow.send_otp("98765").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(flow.step(), LoginStep::Phone);
    }

    #[test]
    fn test_any_six_digit_otp_logs_in() {
        let mut flow = LoginFlow::new(Language::English, IncomeBracket::FifteenToTwenty);
        flow.send_otp("9876543210").unwrap();
        assert_eq!(flow.step(), LoginStep::Otp);

        let profile = flow.verify_otp("000000").unwrap();
        assert_eq!(profile.phone.as_str(), "9876543210");
        assert_eq!(profile.language, Language::English);
        assert_eq!(profile.income, IncomeBracket::FifteenToTwenty);

        assert!(flow.verify_otp("123456").is_ok());
    }

    #[test]
    fn test_incomplete_otp_rejected() {
        let mut flow = LoginFlow::default();
        flow.send_otp("9876543210").unwrap();
        assert!(flow.verify_otp("12345").is_err());
        assert!(flow.verify_otp("12345a").is_err());
        assert!(!LoginFlow::can_verify("1234567"));
    }

    #[test]
    fn test_verify_requires_otp_step() {
        let flow = LoginFlow::default();
        assert!(flow.verify_otp("123456").is_err());
    }

    #[test]
    fn test_change_number_keeps_choices() {
        let mut flow = LoginFlow::new(Language::English, IncomeBracket::TwentyPlus);
        flow.send_otp("9876543210").unwrap();
        flow.change_number();

        assert_eq!(flow.step(), LoginStep::Phone);
        assert_eq!(flow.language, Language::English);
        assert_eq!(flow.income, IncomeBracket::TwentyPlus);
        assert!(flow.verify_otp("123456").is_err());
    }
}
