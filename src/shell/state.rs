use std::sync::Arc;
use std::time::Duration;

use crate::modules::inquiries::use_cases::submit_inquiry::handler::SubmitInquiryHandler;
use crate::modules::registrations::use_cases::checkout::handler::CheckoutHandler;
use crate::modules::registrations::use_cases::process_payment::handler::ProcessPaymentHandler;
use crate::modules::registrations::use_cases::reconcile_payment::handler::ReconcilePaymentHandler;
use crate::modules::registrations::use_cases::register_for_course::handler::RegisterForCourseHandler;
use crate::modules::registrations::use_cases::sweep_abandoned::handler::SweepAbandonedHandler;
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use crate::shared::infrastructure::payment_gateway::stub::StubPaymentGateway;

type Store = InMemoryEntityStore;
type Gateway = StubPaymentGateway;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    pub register_handler: Arc<RegisterForCourseHandler<Store>>,
    pub payment_handler: Arc<ProcessPaymentHandler<Store, Gateway>>,
    pub reconcile_handler: Arc<ReconcilePaymentHandler<Store>>,
    pub checkout_handler: Arc<CheckoutHandler<Store, Gateway>>,
    pub inquiry_handler: Arc<SubmitInquiryHandler<Store>>,
    pub sweep_handler: Arc<SweepAbandonedHandler<Store>>,
}

impl AppState {
    /// Wires every use case onto one shared store and gateway.
    pub fn new(
        store: Arc<Store>,
        gateway: Arc<Gateway>,
        payment_timeout: Duration,
        pending_ttl: chrono::TimeDelta,
    ) -> Self {
        let register_handler = Arc::new(RegisterForCourseHandler::new(store.clone()));
        let payment_handler = Arc::new(ProcessPaymentHandler::new(
            store.clone(),
            gateway.clone(),
            payment_timeout,
        ));
        let checkout_handler = Arc::new(CheckoutHandler::new(
            store.clone(),
            gateway,
            register_handler.clone(),
            payment_handler.clone(),
        ));
        Self {
            register_handler,
            payment_handler,
            checkout_handler,
            reconcile_handler: Arc::new(ReconcilePaymentHandler::new(store.clone())),
            inquiry_handler: Arc::new(SubmitInquiryHandler::new(store.clone())),
            sweep_handler: Arc::new(SweepAbandonedHandler::new(store.clone(), pending_ttl)),
            store,
        }
    }
}
