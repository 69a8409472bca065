use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::catalog::core::course::Course;
use crate::modules::catalog::core::schedule::CourseSchedule;
use crate::modules::catalog::core::testimonial::Testimonial;
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCourse {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub ce_credits: u32,
    pub duration: u32,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: String,
}

impl From<Course> for GqlCourse {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            price: c.price.to_string(),
            ce_credits: c.ce_credits,
            duration: c.duration,
            features: c.features,
            image_url: c.image_url,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSchedule {
    pub id: u32,
    pub course_id: u32,
    pub start_date: String,
    pub end_date: String,
    pub schedule: String,
    pub max_participants: u32,
    pub current_participants: u32,
}

impl From<CourseSchedule> for GqlSchedule {
    fn from(s: CourseSchedule) -> Self {
        Self {
            id: s.id,
            course_id: s.course_id,
            start_date: s.start_date.to_rfc3339(),
            end_date: s.end_date.to_rfc3339(),
            schedule: s.schedule,
            max_participants: s.max_participants,
            current_participants: s.current_participants,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTestimonial {
    pub id: u32,
    pub doctor_name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub testimonial: String,
    pub rating: u8,
}

impl From<Testimonial> for GqlTestimonial {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            doctor_name: t.doctor_name,
            location: t.location,
            specialty: t.specialty,
            testimonial: t.testimonial,
            rating: t.rating,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn courses(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCourse>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.store.list_active_courses().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn course(&self, context: &Context<'_>, id: u32) -> GqlResult<Option<GqlCourse>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.get_course(id).await?.map(Into::into))
    }

    async fn schedules(
        &self,
        context: &Context<'_>,
        course_id: Option<u32>,
    ) -> GqlResult<Vec<GqlSchedule>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.store.list_active_schedules(course_id).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn testimonials(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTestimonial>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.store.list_active_testimonials().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
