//! Customer generation with postal addresses and payment tokens.

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;

use crate::models::CustomerStatus;

/// Generated customer ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCustomer {
    pub status: CustomerStatus,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub contact: i64,
    pub payment_token: String,
}

/// Exclusive upper bound for contact numbers (at most ten digits).
const CONTACT_NUMBER_LIMIT: i64 = 10_000_000_000;

/// Generates customer rows.
#[derive(Debug, Default)]
pub struct CustomerGenerator;

impl CustomerGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single customer.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedCustomer {
        let status = if rng.gen_bool(0.5) {
            CustomerStatus::Active
        } else {
            CustomerStatus::Inactive
        };

        GeneratedCustomer {
            status,
            first_name: FirstName().fake_with_rng(rng),
            last_name: LastName().fake_with_rng(rng),
            address: self.generate_address(rng),
            contact: rng.gen_range(0..CONTACT_NUMBER_LIMIT),
            payment_token: CreditCardNumber().fake_with_rng(rng),
        }
    }

    /// Generates multiple customers.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedCustomer> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Two-line US style postal address.
    fn generate_address(&self, rng: &mut impl Rng) -> String {
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);

        format!("{building} {street}\n{city}, {state} {zip}")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_generate_customer() {
        let mut rng = StdRng::seed_from_u64(3);
        let customer = CustomerGenerator::new().generate(&mut rng);

        assert!(!customer.first_name.is_empty());
        assert!(!customer.last_name.is_empty());
        assert_eq!(customer.address.lines().count(), 2);
        assert!(!customer.payment_token.is_empty());
        assert!((0..CONTACT_NUMBER_LIMIT).contains(&customer.contact));
    }

    #[test]
    fn test_both_statuses_appear() {
        let mut rng = StdRng::seed_from_u64(5);
        let customers = CustomerGenerator::new().generate_batch(200, &mut rng);

        assert_eq!(customers.len(), 200);
        assert!(customers.iter().any(|c| c.status == CustomerStatus::Active));
        assert!(customers.iter().any(|c| c.status == CustomerStatus::Inactive));
    }
}
