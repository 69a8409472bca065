// In memory implementation of the EntityStore port.
//
// Every entity kind lives in its own table: an id allocator plus a map keyed
// by id. Ids only grow, so iterating the map yields insertion order.
//
// Registrations with a charge in flight are tracked in `payment_claims`. That
// set is only touched while holding the registrations write lock.

use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};

use crate::modules::catalog::core::course::{Course, NewCourse};
use crate::modules::catalog::core::schedule::{CourseSchedule, NewCourseSchedule};
use crate::modules::catalog::core::testimonial::{NewTestimonial, Testimonial};
use crate::modules::inquiries::core::inquiry::{Inquiry, NewInquiry};
use crate::modules::registrations::core::payment_status::PaymentStatus;
use crate::modules::registrations::core::registration::{NewRegistration, Registration};
use crate::modules::users::core::user::{NewUser, User};
use crate::shared::core::primitives::{EntityId, IdAllocator};
use crate::shared::infrastructure::entity_store::{EntityKind, EntityStore, EntityStoreError};

struct Table<T> {
    ids: IdAllocator,
    rows: RwLock<BTreeMap<EntityId, T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            ids: IdAllocator::new(),
            rows: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: Clone> Table<T> {
    async fn insert(&self, build: impl FnOnce(EntityId) -> T) -> T {
        let id = self.ids.next();
        let row = build(id);
        self.rows.write().await.insert(id, row.clone());
        row
    }

    async fn get(&self, id: EntityId) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
pub struct InMemoryEntityStore {
    users: Table<User>,
    courses: Table<Course>,
    schedules: Table<CourseSchedule>,
    registrations: Table<Registration>,
    inquiries: Table<Inquiry>,
    testimonials: Table<Testimonial>,
    payment_claims: Mutex<HashSet<EntityId>>,
    is_offline: AtomicBool,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), EntityStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(EntityStoreError::Backend("Entity store offline".into()));
        }
        Ok(())
    }
}

fn registration_mut(
    rows: &mut BTreeMap<EntityId, Registration>,
    id: EntityId,
) -> Result<&mut Registration, EntityStoreError> {
    rows.get_mut(&id).ok_or(EntityStoreError::NotFound {
        kind: EntityKind::Registration,
        id,
    })
}

fn apply(
    registration: &mut Registration,
    status: PaymentStatus,
    payment_id: Option<String>,
) -> Result<Registration, EntityStoreError> {
    registration
        .apply_payment(status, payment_id)
        .map_err(|e| EntityStoreError::IllegalTransition {
            from: e.from,
            to: e.to,
        })?;
    Ok(registration.clone())
}

#[async_trait::async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn create_user(&self, input: NewUser) -> Result<User, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.users.insert(|id| input.into_user(id)).await)
    }

    async fn get_user(&self, id: EntityId) -> Result<Option<User>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.users.get(id).await)
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self
            .users
            .select(|user| user.username == username)
            .await
            .into_iter()
            .next())
    }

    async fn create_course(&self, input: NewCourse) -> Result<Course, EntityStoreError> {
        self.ensure_online()?;
        input.check_invariants().map_err(EntityStoreError::Invariant)?;
        let created_at = Utc::now();
        Ok(self
            .courses
            .insert(|id| input.into_course(id, created_at))
            .await)
    }

    async fn get_course(&self, id: EntityId) -> Result<Option<Course>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.courses.get(id).await)
    }

    async fn list_active_courses(&self) -> Result<Vec<Course>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.courses.select(|course| course.is_active).await)
    }

    async fn create_schedule(
        &self,
        input: NewCourseSchedule,
    ) -> Result<CourseSchedule, EntityStoreError> {
        self.ensure_online()?;
        input.check_invariants().map_err(EntityStoreError::Invariant)?;
        Ok(self
            .schedules
            .insert(|id| input.into_schedule(id))
            .await)
    }

    async fn get_schedule(
        &self,
        id: EntityId,
    ) -> Result<Option<CourseSchedule>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.schedules.get(id).await)
    }

    async fn list_active_schedules(
        &self,
        course_id: Option<EntityId>,
    ) -> Result<Vec<CourseSchedule>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self
            .schedules
            .select(|schedule| {
                schedule.is_active && course_id.is_none_or(|id| schedule.course_id == id)
            })
            .await)
    }

    async fn create_registration(
        &self,
        input: NewRegistration,
    ) -> Result<Registration, EntityStoreError> {
        self.ensure_online()?;
        Ok(self
            .registrations
            .insert(|id| input.into_registration(id))
            .await)
    }

    async fn get_registration(
        &self,
        id: EntityId,
    ) -> Result<Option<Registration>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.registrations.get(id).await)
    }

    async fn update_payment_status(
        &self,
        id: EntityId,
        status: PaymentStatus,
        payment_id: Option<String>,
    ) -> Result<Registration, EntityStoreError> {
        self.ensure_online()?;
        let mut rows = self.registrations.rows.write().await;
        let registration = registration_mut(&mut rows, id)?;
        if self.payment_claims.lock().await.contains(&id) {
            return Err(EntityStoreError::PaymentInFlight { id });
        }
        apply(registration, status, payment_id)
    }

    async fn claim_payment(&self, id: EntityId) -> Result<Registration, EntityStoreError> {
        self.ensure_online()?;
        let mut rows = self.registrations.rows.write().await;
        let registration = registration_mut(&mut rows, id)?;
        if registration.payment_status != PaymentStatus::Pending {
            return Err(EntityStoreError::IllegalTransition {
                from: registration.payment_status,
                to: PaymentStatus::Pending,
            });
        }
        if !self.payment_claims.lock().await.insert(id) {
            return Err(EntityStoreError::PaymentInFlight { id });
        }
        Ok(registration.clone())
    }

    async fn settle_payment(
        &self,
        id: EntityId,
        status: PaymentStatus,
        payment_id: Option<String>,
    ) -> Result<Registration, EntityStoreError> {
        let mut rows = self.registrations.rows.write().await;
        self.payment_claims.lock().await.remove(&id);
        self.ensure_online()?;
        let registration = registration_mut(&mut rows, id)?;
        apply(registration, status, payment_id)
    }

    async fn list_registrations_with_status(
        &self,
        status: PaymentStatus,
    ) -> Result<Vec<Registration>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self
            .registrations
            .select(|registration| registration.payment_status == status)
            .await)
    }

    async fn create_inquiry(&self, input: NewInquiry) -> Result<Inquiry, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.inquiries.insert(|id| input.into_inquiry(id)).await)
    }

    async fn get_inquiry(&self, id: EntityId) -> Result<Option<Inquiry>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.inquiries.get(id).await)
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.inquiries.select(|_| true).await)
    }

    async fn create_testimonial(
        &self,
        input: NewTestimonial,
    ) -> Result<Testimonial, EntityStoreError> {
        self.ensure_online()?;
        input.check_invariants().map_err(EntityStoreError::Invariant)?;
        let created_at = Utc::now();
        Ok(self
            .testimonials
            .insert(|id| input.into_testimonial(id, created_at))
            .await)
    }

    async fn get_testimonial(
        &self,
        id: EntityId,
    ) -> Result<Option<Testimonial>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self.testimonials.get(id).await)
    }

    async fn list_active_testimonials(&self) -> Result<Vec<Testimonial>, EntityStoreError> {
        self.ensure_online()?;
        Ok(self
            .testimonials
            .select(|testimonial| testimonial.is_active)
            .await)
    }
}
