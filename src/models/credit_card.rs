use std::fmt;

use yaserde_derive::YaSerialize;

/// Card details as the gateway expects them inside `<credit_card>`.
/// Unset fields are left out of the document.
#[derive(Clone, Default, PartialEq, Eq, YaSerialize)]
#[yaserde(rename = "credit_card")]
pub struct CreditCard {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub number: Option<String>,
    pub verification_value: Option<String>,
    pub month: Option<u32>,
    pub year: Option<u32>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl CreditCard {
    pub fn new(first_name: &str, last_name: &str, number: &str, month: u32, year: u32) -> CreditCard {
        CreditCard {
            first_name: Some(first_name.to_owned()),
            last_name: Some(last_name.to_owned()),
            number: Some(number.to_owned()),
            month: Some(month),
            year: Some(year),
            ..CreditCard::default()
        }
    }

    pub fn with_full_name(mut self, full_name: &str) -> Self {
        self.full_name = Some(full_name.to_owned());
        self
    }

    pub fn with_verification_value(mut self, cvv: &str) -> Self {
        self.verification_value = Some(cvv.to_owned());
        self
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_owned());
        self
    }

    pub fn with_address(mut self, address1: &str, address2: Option<&str>) -> Self {
        self.address1 = Some(address1.to_owned());
        self.address2 = address2.map(str::to_owned);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_owned());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_owned());
        self
    }

    pub fn with_zip(mut self, zip: &str) -> Self {
        self.zip = Some(zip.to_owned());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_owned());
        self
    }

    pub fn with_phone_number(mut self, phone_number: &str) -> Self {
        self.phone_number = Some(phone_number.to_owned());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self
    }

    pub fn last_four(&self) -> Option<&str> {
        let number = self.number.as_deref()?;
        let start = number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        number.get(start..)
    }
}

/// Shows only the last four digits of the number and hides the verification value.
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self
            .last_four()
            .map(|last| format!("****{last}"));
        let verification_value = self.verification_value.as_ref().map(|_| "***");

        f.debug_struct("CreditCard")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("full_name", &self.full_name)
            .field("number", &number)
            .field("verification_value", &verification_value)
            .field("month", &self.month)
            .field("year", &self.year)
            .field("company", &self.company)
            .field("address1", &self.address1)
            .field("address2", &self.address2)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("zip", &self.zip)
            .field("country", &self.country)
            .field("phone_number", &self.phone_number)
            .field("email", &self.email)
            .finish()
    }
}
