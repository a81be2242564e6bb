//! Form records for the contact, login and registration pages.
//!
//! DESIGN
//! ======
//! Inputs report `(name, value)` pairs. Each record patches only the field
//! whose name matches and ignores unknown names, so one change handler can
//! serve every input of a form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// How long the contact confirmation stays visible after submit.
pub const CONTACT_CONFIRMATION_MS: u64 = 4_000;

/// Roles offered by the registration selector, stored verbatim.
pub const ROLES: &[&str] = &["Client", "Artisan", "Tailleur", "Vendeur d'Accessoires"];

/// Patch-by-name access shared by every form record.
pub trait FormFields {
    /// Replace the field called `name`. Returns `false` for unknown names.
    fn set_field(&mut self, name: &str, value: String) -> bool;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields for ContactForm {
    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormFields for LoginForm {
    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "email" => &mut self.email,
            "password" => &mut self.password,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            role: ROLES[0].to_owned(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl RegisterForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl FormFields for RegisterForm {
    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "fullName" => &mut self.full_name,
            "email" => &mut self.email,
            "role" => &mut self.role,
            "password" => &mut self.password,
            "confirmPassword" => &mut self.confirm_password,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Visibility of the contact form's "message sent" confirmation.
///
/// Each submit bumps `generation`; the scheduled reset only clears the flag
/// if no newer submit happened in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentNotice {
    pub visible: bool,
    generation: u64,
}

impl SentNotice {
    /// Show the confirmation and return the token the reset must present.
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    /// Hide the confirmation if `token` is still the latest submit.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

/// Contact section state: the form record plus its confirmation window.
///
/// `submit` opens the window and hands out the token the timer must present;
/// `timer_elapsed` closes it and clears the form, unless a newer submit or
/// the section's teardown came first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub notice: SentNotice,
    mounted: bool,
}

impl Default for ContactState {
    fn default() -> Self {
        Self { form: ContactForm::default(), notice: SentNotice::default(), mounted: true }
    }
}

impl ContactState {
    pub fn submit(&mut self) -> u64 {
        self.notice.show()
    }

    /// Returns whether the confirmation closed and the form was reset.
    pub fn timer_elapsed(&mut self, token: u64) -> bool {
        if !self.mounted || !self.notice.expire(token) {
            return false;
        }
        self.form = ContactForm::default();
        true
    }

    /// The section left the page; pending timers become no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
