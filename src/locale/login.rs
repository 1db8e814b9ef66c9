//! Login screen strings

use crate::models::Language;

/// Banner shown after an OTP is "sent"; always bilingual
pub const OTP_SENT: &str = "OTP भेजा गया / OTP Sent to";

/// Label of the action that returns to the phone step; always bilingual
pub const CHANGE_NUMBER: &str = "Change Number / नंबर बदलें";

#[derive(Debug)]
pub struct LoginContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub phone_label: &'static str,
    pub otp_label: &'static str,
    pub send_otp: &'static str,
    pub verify_otp: &'static str,
    pub language: &'static str,
    pub income: &'static str,
}

static HINDI: LoginContent = LoginContent {
    title: "पैसा ट्रैकर",
    subtitle: "आसान तरीके से अपना पैसा संभालें",
    phone_label: "मोबाइल नंबर",
    otp_label: "OTP डालें",
    send_otp: "OTP भेजें",
    verify_otp: "जांचें",
    language: "भाषा चुनें",
    income: "मासिक आय",
};

static ENGLISH: LoginContent = LoginContent {
    title: "Money Tracker",
    subtitle: "Manage your finances effortlessly",
    phone_label: "Mobile Number",
    otp_label: "Enter OTP",
    send_otp: "Send OTP",
    verify_otp: "Verify",
    language: "Choose Language",
    income: "Monthly Income",
};

impl LoginContent {
    pub fn for_language(language: Language) -> &'static LoginContent {
        match language {
            Language::Hindi => &HINDI,
            Language::English => &ENGLISH,
        }
    }
}
