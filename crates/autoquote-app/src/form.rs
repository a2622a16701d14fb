//! New-quote form
//!
//! Holds raw field text as typed and turns it into an [`ApplicantInput`]
//! only when every field passes. This is where the 18..=100 age bound
//! lives; the premium calculator itself never checks it.

use autoquote_common::{
    ApplicantInput, CoverageType, FormError, VehicleType, MAX_APPLICANT_AGE, MIN_APPLICANT_AGE,
};
use serde::{Deserialize, Serialize};

use crate::session::CommandError;

/// Input fields of the new-quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Age,
    VehicleType,
    Coverage,
    Email,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Age,
        FormField::VehicleType,
        FormField::Coverage,
        FormField::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Age => "age",
            FormField::VehicleType => "vehicle_type",
            FormField::Coverage => "coverage",
            FormField::Email => "email",
        }
    }

    /// Caption shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Age => "Age",
            FormField::VehicleType => "Vehicle Type",
            FormField::Coverage => "Coverage Type",
            FormField::Email => "Email Address",
        }
    }
}

impl std::str::FromStr for FormField {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| CommandError::UnknownField(s.to_string()))
    }
}

/// Raw form contents, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub vehicle_type: String,
    pub coverage: String,
    pub email: String,
}

impl ApplicantForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Age => &self.age,
            FormField::VehicleType => &self.vehicle_type,
            FormField::Coverage => &self.coverage,
            FormField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Age => &mut self.age,
            FormField::VehicleType => &mut self.vehicle_type,
            FormField::Coverage => &mut self.coverage,
            FormField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Check every field in form order and produce rating input
    pub fn validate(&self) -> Result<ApplicantInput, FormError> {
        if let Some(missing) = FormField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(FormError::MissingField(missing.label()));
        }

        let age = parse_age(self.age.trim())?;
        let vehicle_type: VehicleType = self.vehicle_type.parse()?;
        let coverage: CoverageType = self.coverage.parse()?;
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        Ok(ApplicantInput::new(
            self.first_name.trim(),
            self.last_name.trim(),
            age,
            vehicle_type,
            coverage,
            email,
        ))
    }
}

fn parse_age(raw: &str) -> Result<u8, FormError> {
    let age: u32 = raw
        .parse()
        .map_err(|_| FormError::AgeNotANumber(raw.to_string()))?;

    if age < u32::from(MIN_APPLICANT_AGE) || age > u32::from(MAX_APPLICANT_AGE) {
        return Err(FormError::AgeOutOfRange {
            age,
            min: MIN_APPLICANT_AGE,
            max: MAX_APPLICANT_AGE,
        });
    }
    // In range, so it fits
    Ok(age as u8)
}

/// `local@domain.tld` with no whitespace and a single `@`
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ApplicantForm {
        ApplicantForm::default()
            .with(FormField::FirstName, "John")
            .with(FormField::LastName, "Doe")
            .with(FormField::Age, "30")
            .with(FormField::VehicleType, "sedan")
            .with(FormField::Coverage, "liability")
            .with(FormField::Email, "john.doe@example.com")
    }

    #[test]
    fn test_valid_form() {
        let applicant = filled().validate().unwrap();
        assert_eq!(applicant.customer_name(), "John Doe");
        assert_eq!(applicant.age, 30);
        assert_eq!(applicant.vehicle_type, VehicleType::Sedan);
        assert_eq!(applicant.coverage, CoverageType::Liability);
    }

    #[test]
    fn test_missing_field_reported_in_form_order() {
        let form = ApplicantForm::default().with(FormField::Email, "a@b.co");
        assert_eq!(form.validate(), Err(FormError::MissingField("First Name")));

        let form = filled().with(FormField::Coverage, "   ");
        assert_eq!(form.validate(), Err(FormError::MissingField("Coverage Type")));
    }

    #[test]
    fn test_age_bounds() {
        assert!(filled().with(FormField::Age, "18").validate().is_ok());
        assert!(filled().with(FormField::Age, "100").validate().is_ok());
        assert_eq!(
            filled().with(FormField::Age, "17").validate(),
            Err(FormError::AgeOutOfRange {
                age: 17,
                min: 18,
                max: 100
            })
        );
        assert!(matches!(
            filled().with(FormField::Age, "101").validate(),
            Err(FormError::AgeOutOfRange { age: 101, .. })
        ));
        assert_eq!(
            filled().with(FormField::Age, "thirty").validate(),
            Err(FormError::AgeNotANumber("thirty".to_string()))
        );
    }

    #[test]
    fn test_unknown_options() {
        assert_eq!(
            filled().with(FormField::VehicleType, "boat").validate(),
            Err(FormError::UnknownVehicleType("boat".to_string()))
        );
        assert_eq!(
            filled().with(FormField::Coverage, "gap").validate(),
            Err(FormError::UnknownCoverage("gap".to_string()))
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_plausible_email("sarah.j@email.com"));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@localhost"));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("a b@c.com"));
        assert!(!is_plausible_email("a@.com"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!("first_name".parse::<FormField>().unwrap(), FormField::FirstName);
        assert_eq!("Vehicle-Type".parse::<FormField>().unwrap(), FormField::VehicleType);
        assert!("zip".parse::<FormField>().is_err());
    }
}
