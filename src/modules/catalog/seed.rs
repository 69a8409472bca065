// Fixed catalog loaded at startup: three courses, one schedule per course and
// three testimonials. Ids come out as 1..=3 for each kind on a fresh store.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;
use tracing::info;

use crate::modules::catalog::core::course::NewCourse;
use crate::modules::catalog::core::schedule::NewCourseSchedule;
use crate::modules::catalog::core::testimonial::NewTestimonial;
use crate::shared::infrastructure::entity_store::{EntityStore, EntityStoreError};

pub async fn seed_catalog<TStore>(store: &TStore) -> Result<(), EntityStoreError>
where
    TStore: EntityStore + ?Sized,
{
    let mut course_ids = Vec::new();
    for course in courses() {
        course_ids.push(store.create_course(course).await?.id);
    }

    let schedules = [
        (0, at(2025, 1, 18, 9)?, at(2025, 1, 19, 17)?, "Weekend Intensive", 20),
        (1, at(2025, 3, 1, 18)?, at(2025, 3, 22, 21)?, "Evening Series", 15),
        (2, at(2025, 5, 10, 9)?, at(2025, 5, 11, 17)?, "Weekend Intensive", 12),
    ];
    for (course, start_date, end_date, label, max_participants) in schedules {
        store
            .create_schedule(NewCourseSchedule {
                course_id: course_ids[course],
                start_date,
                end_date,
                schedule: label.to_string(),
                max_participants,
                current_participants: 0,
                is_active: true,
            })
            .await?;
    }

    for testimonial in testimonials() {
        store.create_testimonial(testimonial).await?;
    }

    info!(courses = course_ids.len(), "catalog seeded");
    Ok(())
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> Result<DateTime<Utc>, EntityStoreError> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .ok_or_else(|| {
            EntityStoreError::Invariant(format!("invalid seed timestamp {year}-{month}-{day}"))
        })
}

fn courses() -> Vec<NewCourse> {
    vec![
        NewCourse {
            title: "Mobile Dentistry Fundamentals".into(),
            description: "Learn the essentials of mobile dental practice including equipment setup, infection control, and patient management in home settings.".into(),
            price: dec!(500.00),
            ce_credits: 10,
            duration: 20,
            features: vec![
                "Comprehensive equipment training".into(),
                "CDC compliance guidelines".into(),
                "Professional certification".into(),
            ],
            image_url: Some("https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300".into()),
            is_active: true,
        },
        NewCourse {
            title: "Advanced Mobile Practice Management".into(),
            description: "Master the business aspects of mobile dentistry including billing, insurance, marketing, and practice expansion strategies.".into(),
            price: dec!(1000.00),
            ce_credits: 12,
            duration: 24,
            features: vec![
                "Insurance billing & coding".into(),
                "Marketing strategies".into(),
                "Practice expansion planning".into(),
                "Legal compliance".into(),
            ],
            image_url: Some("https://images.unsplash.com/photo-1576091160550-2173dba999ef?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300".into()),
            is_active: true,
        },
        NewCourse {
            title: "Complete Mobile Dentistry Certification".into(),
            description: "Comprehensive certification program covering all aspects of mobile dental practice from setup to advanced clinical procedures.".into(),
            price: dec!(5000.00),
            ce_credits: 20,
            duration: 40,
            features: vec![
                "Full certification program".into(),
                "Live patient demonstrations".into(),
                "Complete starter kit".into(),
                "1-year mentorship".into(),
            ],
            image_url: Some("https://images.unsplash.com/photo-1587825140708-dfaf72ae4b04?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300".into()),
            is_active: true,
        },
    ]
}

fn testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            doctor_name: "Dr. Jennifer Rodriguez".into(),
            location: "Los Angeles, CA".into(),
            specialty: Some("General Dentist".into()),
            testimonial: "Dr. Karimi's course transformed my practice. I've been able to serve homebound patients and increase my revenue by 40% within the first year.".into(),
            rating: 5,
            is_active: true,
        },
        NewTestimonial {
            doctor_name: "Dr. Michael Kim".into(),
            location: "San Francisco, CA".into(),
            specialty: Some("Pediatric Dentist".into()),
            testimonial: "The hands-on training was invaluable. I now confidently provide mobile services to special needs children in their homes.".into(),
            rating: 5,
            is_active: true,
        },
        NewTestimonial {
            doctor_name: "Dr. Sarah Patel".into(),
            location: "San Diego, CA".into(),
            specialty: Some("Geriatric Dentist".into()),
            testimonial: "Excellent course content and ongoing support. Mobile dentistry has become a rewarding part of my practice serving elderly patients.".into(),
            rating: 5,
            is_active: true,
        },
    ]
}
