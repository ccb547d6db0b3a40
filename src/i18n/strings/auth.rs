//! Localized strings for the authentication screens.

/// Authentication strings
#[derive(Debug, Clone)]
pub struct AuthStrings {
    /// Sign-in page title
    pub sign_in: &'static str,

    pub email: &'static str,
    pub password: &'static str,
    pub remember_me: &'static str,
    pub forgot_password: &'static str,
    pub sign_out: &'static str,

    /// Greeting after a successful sign-in. Placeholders: {{name}}
    pub welcome_back: &'static str,

    pub invalid_credentials: &'static str,
    pub session_expired: &'static str,
    pub reset_password: &'static str,

    /// Confirmation after a reset mail was dispatched. Placeholders: {{email}}
    pub reset_email_sent: &'static str,
}

impl AuthStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "sign_in",
        "email",
        "password",
        "remember_me",
        "forgot_password",
        "sign_out",
        "welcome_back",
        "invalid_credentials",
        "session_expired",
        "reset_password",
        "reset_email_sent",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "sign_in" => Some(self.sign_in),
            "email" => Some(self.email),
            "password" => Some(self.password),
            "remember_me" => Some(self.remember_me),
            "forgot_password" => Some(self.forgot_password),
            "sign_out" => Some(self.sign_out),
            "welcome_back" => Some(self.welcome_back),
            "invalid_credentials" => Some(self.invalid_credentials),
            "session_expired" => Some(self.session_expired),
            "reset_password" => Some(self.reset_password),
            "reset_email_sent" => Some(self.reset_email_sent),
            _ => None,
        }
    }
}

/// Arabic authentication strings (default language)
pub const ARABIC_STRINGS: AuthStrings = AuthStrings {
    sign_in: "تسجيل الدخول",
    email: "البريد الإلكتروني",
    password: "كلمة المرور",
    remember_me: "تذكرني",
    forgot_password: "نسيت كلمة المرور؟",
    sign_out: "تسجيل الخروج",
    welcome_back: "مرحباً بعودتك {{name}}",
    invalid_credentials: "البريد الإلكتروني أو كلمة المرور غير صحيحة",
    session_expired: "انتهت الجلسة، يرجى تسجيل الدخول مجدداً",
    reset_password: "إعادة تعيين كلمة المرور",
    reset_email_sent: "تم إرسال رابط إعادة التعيين إلى {{email}}",
};

/// English authentication strings
pub const ENGLISH_STRINGS: AuthStrings = AuthStrings {
    sign_in: "Sign In",
    email: "Email",
    password: "Password",
    remember_me: "Remember me",
    forgot_password: "Forgot password?",
    sign_out: "Sign Out",
    welcome_back: "Welcome back {{name}}",
    invalid_credentials: "Incorrect email or password",
    session_expired: "Your session has expired, please sign in again",
    reset_password: "Reset Password",
    reset_email_sent: "A reset link has been sent to {{email}}",
};
