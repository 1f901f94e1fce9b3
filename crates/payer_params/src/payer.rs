//! Request models that are used to store payer data.

use masking::{PeekInterface, Secret, Strategy};

use crate::{
    consts,
    errors::{CustomResult, ValidationError},
    pii::{EmailStrategy, IpAddressStrategy, PhoneNumberStrategy},
    types::{ParameterKey, ParameterMap},
    validation,
};

/// Conversion of a request model into the wire parameters consumed by the
/// request builder.
pub trait RequestParams {
    /// Flattens the model into its key-value form. Pure and infallible;
    /// calling it twice on the same value yields identical maps.
    fn to_parameter_map(&self) -> ParameterMap;

    /// Checks the documented field constraints ahead of transport.
    ///
    /// Construction never enforces them; the request builder runs this
    /// pass and reports the first violation against the offending field.
    fn validate(&self) -> CustomResult<(), ValidationError>;
}

// Parameter values drop the field's masking strategy on the way into the
// map; the map itself masks uniformly.
fn field_value<I: Strategy<String>>(field: &Secret<String, I>) -> Secret<String> {
    Secret::new(field.peek().clone())
}

/// Payer details for the server-to-server sale and auth flows.
///
/// Every field is required and every field is emitted.
#[derive(Clone, Debug)]
pub struct Payer {
    /// Customer's first name, up to 32 characters.
    pub first_name: Secret<String>,

    /// Customer's surname, up to 32 characters.
    pub last_name: Secret<String>,

    /// Customer's address, up to 255 characters.
    pub address: Secret<String>,

    /// Customer's country as a 2-letter code (ISO 3166-1 alpha-2).
    pub country_code: String,

    /// Customer's state as a 2-letter code,
    /// [`consts::STATE_NOT_APPLICABLE`] for countries without states.
    pub state: Secret<String>,

    /// Customer's city, up to 32 characters.
    pub city: String,

    /// ZIP code of the customer, up to 32 characters.
    pub zip: Secret<String>,

    /// Customer's email, up to 256 characters.
    pub email: Secret<String, EmailStrategy>,

    /// Customer's phone, up to 32 characters.
    pub phone: Secret<String, PhoneNumberStrategy>,

    /// IP address of the customer, a dotted-quad between `1.0.0.0` and
    /// `123.123.123.123`.
    pub ip_address: Secret<String, IpAddressStrategy>,
}

impl RequestParams for Payer {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert(ParameterKey::PayerFirstName, field_value(&self.first_name));
        params.insert(ParameterKey::PayerLastName, field_value(&self.last_name));
        params.insert(ParameterKey::PayerAddress, field_value(&self.address));
        params.insert(
            ParameterKey::PayerCountry,
            Secret::new(self.country_code.clone()),
        );
        params.insert(ParameterKey::PayerState, field_value(&self.state));
        params.insert(ParameterKey::PayerCity, Secret::new(self.city.clone()));
        params.insert(ParameterKey::PayerZip, field_value(&self.zip));
        params.insert(ParameterKey::PayerEmail, field_value(&self.email));
        params.insert(ParameterKey::PayerPhone, field_value(&self.phone));
        params.insert(ParameterKey::PayerIp, field_value(&self.ip_address));
        params
    }

    fn validate(&self) -> CustomResult<(), ValidationError> {
        validation::validate_max_length(
            "first_name",
            self.first_name.peek(),
            consts::PAYER_NAME_MAX_LENGTH,
        )?;
        validation::validate_max_length(
            "last_name",
            self.last_name.peek(),
            consts::PAYER_NAME_MAX_LENGTH,
        )?;
        validation::validate_max_length(
            "address",
            self.address.peek(),
            consts::PAYER_ADDRESS_MAX_LENGTH,
        )?;
        validation::validate_country_code("country_code", &self.country_code)?;
        validation::validate_state("state", self.state.peek())?;
        validation::validate_max_length("city", &self.city, consts::PAYER_CITY_MAX_LENGTH)?;
        validation::validate_max_length("zip", self.zip.peek(), consts::PAYER_ZIP_MAX_LENGTH)?;
        validation::validate_max_length(
            "email",
            self.email.peek(),
            consts::PAYER_EMAIL_MAX_LENGTH,
        )?;
        validation::validate_email("email", self.email.peek())?;
        validation::validate_max_length(
            "phone",
            self.phone.peek(),
            consts::PAYER_PHONE_MAX_LENGTH,
        )?;
        validation::validate_ip_address("ip_address", self.ip_address.peek())?;
        Ok(())
    }
}

/// Payer details for the hosted web-sale flow.
///
/// The endpoint tolerates partial payer data, so every field is optional
/// and only present fields are emitted. The key set is the bare one, not
/// the `payer`-prefixed set the other flows use.
#[derive(Clone, Debug, Default)]
pub struct PayerWebSale {
    /// Customer's first name, up to 32 characters.
    pub first_name: Option<Secret<String>>,

    /// Customer's surname, up to 32 characters.
    pub last_name: Option<Secret<String>>,

    /// Customer's address, up to 255 characters.
    pub address: Option<Secret<String>>,

    /// Customer's country as a 2-letter code (ISO 3166-1 alpha-2).
    pub country_code: Option<String>,

    /// Customer's state as a 2-letter code,
    /// [`consts::STATE_NOT_APPLICABLE`] for countries without states.
    pub state: Option<Secret<String>>,

    /// Customer's city, up to 32 characters.
    pub city: Option<String>,

    /// ZIP code of the customer, up to 32 characters.
    pub zip: Option<Secret<String>>,

    /// Customer's email, up to 256 characters.
    pub email: Option<Secret<String, EmailStrategy>>,

    /// Customer's phone, up to 32 characters.
    pub phone: Option<Secret<String, PhoneNumberStrategy>>,
}

impl RequestParams for PayerWebSale {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert_optional(
            ParameterKey::FirstName,
            self.first_name.as_ref().map(field_value),
        );
        params.insert_optional(
            ParameterKey::LastName,
            self.last_name.as_ref().map(field_value),
        );
        params.insert_optional(
            ParameterKey::Address,
            self.address.as_ref().map(field_value),
        );
        params.insert_optional(
            ParameterKey::Country,
            self.country_code.clone().map(Secret::new),
        );
        params.insert_optional(ParameterKey::State, self.state.as_ref().map(field_value));
        params.insert_optional(ParameterKey::City, self.city.clone().map(Secret::new));
        params.insert_optional(ParameterKey::Zip, self.zip.as_ref().map(field_value));
        params.insert_optional(ParameterKey::Email, self.email.as_ref().map(field_value));
        params.insert_optional(ParameterKey::Phone, self.phone.as_ref().map(field_value));
        params
    }

    fn validate(&self) -> CustomResult<(), ValidationError> {
        if let Some(first_name) = &self.first_name {
            validation::validate_max_length(
                "first_name",
                first_name.peek(),
                consts::PAYER_NAME_MAX_LENGTH,
            )?;
        }
        if let Some(last_name) = &self.last_name {
            validation::validate_max_length(
                "last_name",
                last_name.peek(),
                consts::PAYER_NAME_MAX_LENGTH,
            )?;
        }
        if let Some(address) = &self.address {
            validation::validate_max_length(
                "address",
                address.peek(),
                consts::PAYER_ADDRESS_MAX_LENGTH,
            )?;
        }
        if let Some(country_code) = &self.country_code {
            validation::validate_country_code("country_code", country_code)?;
        }
        if let Some(state) = &self.state {
            validation::validate_state("state", state.peek())?;
        }
        if let Some(city) = &self.city {
            validation::validate_max_length("city", city, consts::PAYER_CITY_MAX_LENGTH)?;
        }
        if let Some(zip) = &self.zip {
            validation::validate_max_length("zip", zip.peek(), consts::PAYER_ZIP_MAX_LENGTH)?;
        }
        if let Some(email) = &self.email {
            validation::validate_max_length(
                "email",
                email.peek(),
                consts::PAYER_EMAIL_MAX_LENGTH,
            )?;
            validation::validate_email("email", email.peek())?;
        }
        if let Some(phone) = &self.phone {
            validation::validate_max_length(
                "phone",
                phone.peek(),
                consts::PAYER_PHONE_MAX_LENGTH,
            )?;
        }
        Ok(())
    }
}

/// Payer details for the Apple Pay flow.
///
/// A superset of [`Payer`]: the same required fields plus middle name,
/// birth date and a second address line, all required and always emitted.
#[derive(Clone, Debug)]
pub struct PayerApplePay {
    /// Customer's first name, up to 32 characters.
    pub first_name: Secret<String>,

    /// Customer's surname, up to 32 characters.
    pub last_name: Secret<String>,

    /// Customer's middle name, up to 32 characters.
    pub middle_name: Secret<String>,

    /// Customer's birthday in `yyyy-MM-dd` form, e.g. `1970-02-17`.
    pub birthday: Secret<String>,

    /// Customer's address, up to 255 characters.
    pub address: Secret<String>,

    /// The adjoining road or locality (if required) of the customer's
    /// address, up to 255 characters.
    pub address2: Secret<String>,

    /// Customer's country as a 2-letter code (ISO 3166-1 alpha-2).
    pub country_code: String,

    /// Customer's state as a 2-letter code,
    /// [`consts::STATE_NOT_APPLICABLE`] for countries without states.
    pub state: Secret<String>,

    /// Customer's city, up to 32 characters.
    pub city: String,

    /// ZIP code of the customer, up to 32 characters.
    pub zip: Secret<String>,

    /// Customer's email, up to 256 characters.
    pub email: Secret<String, EmailStrategy>,

    /// Customer's phone, up to 32 characters.
    pub phone: Secret<String, PhoneNumberStrategy>,

    /// IP address of the customer, a dotted-quad between `1.0.0.0` and
    /// `123.123.123.123`.
    pub ip_address: Secret<String, IpAddressStrategy>,
}

impl RequestParams for PayerApplePay {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert(ParameterKey::PayerFirstName, field_value(&self.first_name));
        params.insert(ParameterKey::PayerLastName, field_value(&self.last_name));
        params.insert(
            ParameterKey::PayerMidleName,
            field_value(&self.middle_name),
        );
        params.insert(ParameterKey::PayerBirthDate, field_value(&self.birthday));
        params.insert(ParameterKey::PayerAddress, field_value(&self.address));
        params.insert(ParameterKey::PayerAddress2, field_value(&self.address2));
        params.insert(
            ParameterKey::PayerCountry,
            Secret::new(self.country_code.clone()),
        );
        params.insert(ParameterKey::PayerState, field_value(&self.state));
        params.insert(ParameterKey::PayerCity, Secret::new(self.city.clone()));
        params.insert(ParameterKey::PayerZip, field_value(&self.zip));
        params.insert(ParameterKey::PayerEmail, field_value(&self.email));
        params.insert(ParameterKey::PayerPhone, field_value(&self.phone));
        params.insert(ParameterKey::PayerIp, field_value(&self.ip_address));
        params
    }

    fn validate(&self) -> CustomResult<(), ValidationError> {
        validation::validate_max_length(
            "first_name",
            self.first_name.peek(),
            consts::PAYER_NAME_MAX_LENGTH,
        )?;
        validation::validate_max_length(
            "last_name",
            self.last_name.peek(),
            consts::PAYER_NAME_MAX_LENGTH,
        )?;
        validation::validate_max_length(
            "middle_name",
            self.middle_name.peek(),
            consts::PAYER_NAME_MAX_LENGTH,
        )?;
        validation::validate_birth_date("birthday", self.birthday.peek())?;
        validation::validate_max_length(
            "address",
            self.address.peek(),
            consts::PAYER_ADDRESS_MAX_LENGTH,
        )?;
        validation::validate_max_length(
            "address2",
            self.address2.peek(),
            consts::PAYER_ADDRESS_MAX_LENGTH,
        )?;
        validation::validate_country_code("country_code", &self.country_code)?;
        validation::validate_state("state", self.state.peek())?;
        validation::validate_max_length("city", &self.city, consts::PAYER_CITY_MAX_LENGTH)?;
        validation::validate_max_length("zip", self.zip.peek(), consts::PAYER_ZIP_MAX_LENGTH)?;
        validation::validate_max_length(
            "email",
            self.email.peek(),
            consts::PAYER_EMAIL_MAX_LENGTH,
        )?;
        validation::validate_email("email", self.email.peek())?;
        validation::validate_max_length(
            "phone",
            self.phone.peek(),
            consts::PAYER_PHONE_MAX_LENGTH,
        )?;
        validation::validate_ip_address("ip_address", self.ip_address.peek())?;
        Ok(())
    }
}
