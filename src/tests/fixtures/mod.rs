// Shared builders for unit, handler and end-to-end tests.

pub mod catalog {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use crate::modules::catalog::core::course::NewCourse;
    use crate::modules::catalog::core::schedule::{DEFAULT_MAX_PARTICIPANTS, NewCourseSchedule};
    use crate::modules::catalog::core::testimonial::{DEFAULT_RATING, NewTestimonial};
    use crate::shared::core::primitives::EntityId;

    pub fn make_new_course(title: &str, price: Decimal) -> NewCourse {
        NewCourse {
            title: title.to_string(),
            description: format!("{title} course"),
            price,
            ce_credits: 10,
            duration: 20,
            features: vec!["Hands-on training".into()],
            image_url: None,
            is_active: true,
        }
    }

    pub fn make_new_schedule(course_id: EntityId) -> NewCourseSchedule {
        NewCourseSchedule {
            course_id,
            start_date: Utc.with_ymd_and_hms(2025, 1, 18, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 1, 19, 17, 0, 0).unwrap(),
            schedule: "Weekend Intensive".into(),
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            current_participants: 0,
            is_active: true,
        }
    }

    pub fn make_new_testimonial(doctor_name: &str, is_active: bool) -> NewTestimonial {
        NewTestimonial {
            doctor_name: doctor_name.to_string(),
            location: "Austin, TX".into(),
            specialty: Some("General Dentist".into()),
            testimonial: "Practical and well organised.".into(),
            rating: DEFAULT_RATING,
            is_active,
        }
    }
}

pub mod registrations {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::modules::registrations::core::registration::NewRegistration;
    use crate::modules::registrations::use_cases::register_for_course::command::RegisterForCourse;
    use crate::shared::core::primitives::EntityId;

    pub fn make_new_registration(course_id: EntityId, total_amount: Decimal) -> NewRegistration {
        let form = RegisterForCourseBuilder::new().build();
        NewRegistration {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: form.phone,
            dental_license_number: form.dental_license_number,
            course_id,
            schedule_id: None,
            total_amount,
            registration_date: Utc::now(),
        }
    }

    pub struct RegisterForCourseBuilder {
        inner: RegisterForCourse,
    }

    impl Default for RegisterForCourseBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    #[allow(dead_code)]
    impl RegisterForCourseBuilder {
        pub fn new() -> Self {
            let json = include_str!("json/register_for_course.json");
            Self {
                inner: serde_json::from_str(json).unwrap(),
            }
        }

        pub fn first_name(mut self, v: impl Into<String>) -> Self {
            self.inner.first_name = v.into();
            self
        }

        pub fn last_name(mut self, v: impl Into<String>) -> Self {
            self.inner.last_name = v.into();
            self
        }

        pub fn email(mut self, v: impl Into<String>) -> Self {
            self.inner.email = v.into();
            self
        }

        pub fn dental_license_number(mut self, v: impl Into<String>) -> Self {
            self.inner.dental_license_number = v.into();
            self
        }

        pub fn course_id(mut self, v: EntityId) -> Self {
            self.inner.course_id = v;
            self
        }

        pub fn schedule_id(mut self, v: EntityId) -> Self {
            self.inner.schedule_id = Some(v);
            self
        }

        pub fn build(self) -> RegisterForCourse {
            self.inner
        }
    }

    #[cfg(test)]
    mod register_for_course_builder_tests {
        use super::*;
        use rstest::rstest;

        #[rstest]
        fn default_delegates_to_new_and_parses_json() {
            let built = RegisterForCourseBuilder::default().build();
            assert_eq!(built.first_name, "Grace");
            assert_eq!(built.dental_license_number, "CA-DDS-12345");
            assert_eq!(built.course_id, 1);
            assert_eq!(built.schedule_id, None);
        }

        #[rstest]
        fn setters_override_fields() {
            let built = RegisterForCourseBuilder::new()
                .first_name("Ada")
                .last_name("Lovelace")
                .email("ada@example.com")
                .course_id(3)
                .schedule_id(3)
                .build();
            assert_eq!(built.first_name, "Ada");
            assert_eq!(built.last_name, "Lovelace");
            assert_eq!(built.email, "ada@example.com");
            assert_eq!(built.course_id, 3);
            assert_eq!(built.schedule_id, Some(3));
        }
    }
}

pub mod payments {
    use crate::shared::infrastructure::payment_gateway::CardDetails;

    pub fn make_card() -> CardDetails {
        CardDetails {
            card_number: "4111 1111 1111 1111".into(),
            expiry_date: "12/39".into(),
            cvv: "123".into(),
        }
    }
}

pub mod inquiries {
    use crate::modules::inquiries::use_cases::submit_inquiry::command::SubmitInquiry;

    pub struct SubmitInquiryBuilder {
        inner: SubmitInquiry,
    }

    impl Default for SubmitInquiryBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SubmitInquiryBuilder {
        pub fn new() -> Self {
            Self {
                inner: SubmitInquiry {
                    first_name: "Grace".into(),
                    last_name: "Hopper".into(),
                    email: "grace.hopper@example.com".into(),
                    dental_license_number: None,
                    message: "Do you offer group rates?".into(),
                },
            }
        }

        pub fn message(mut self, v: impl Into<String>) -> Self {
            self.inner.message = v.into();
            self
        }

        pub fn build(self) -> SubmitInquiry {
            self.inner
        }
    }
}

pub mod state {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::modules::catalog::seed::seed_catalog;
    use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
    use crate::shared::infrastructure::payment_gateway::stub::StubPaymentGateway;
    use crate::shell::state::AppState;

    const PAYMENT_TIMEOUT: Duration = Duration::from_secs(10);

    fn make_state(store: InMemoryEntityStore, gateway: StubPaymentGateway) -> AppState {
        AppState::new(
            Arc::new(store),
            Arc::new(gateway),
            PAYMENT_TIMEOUT,
            chrono::TimeDelta::minutes(15),
        )
    }

    async fn seeded_store() -> InMemoryEntityStore {
        let store = InMemoryEntityStore::new();
        seed_catalog(&store).await.unwrap();
        store
    }

    /// Seeded catalog, instant approving gateway.
    pub async fn make_seeded_state() -> AppState {
        make_state(seeded_store().await, StubPaymentGateway::instant())
    }

    pub async fn make_declining_state(message: &str) -> AppState {
        make_state(
            seeded_store().await,
            StubPaymentGateway::instant().decline_with(message),
        )
    }

    pub async fn make_offline_gateway_state() -> AppState {
        let mut gateway = StubPaymentGateway::instant();
        gateway.toggle_offline();
        make_state(seeded_store().await, gateway)
    }

    pub async fn make_slow_gateway_state(charge_latency: Duration) -> AppState {
        make_state(
            seeded_store().await,
            StubPaymentGateway::new(Duration::ZERO, charge_latency),
        )
    }

    pub fn make_offline_store_state() -> AppState {
        let store = InMemoryEntityStore::new();
        store.toggle_offline();
        make_state(store, StubPaymentGateway::instant())
    }
}
