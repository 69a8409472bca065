pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod entity_store;
        pub mod http;
        pub mod payment_gateway;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod user;
        }
    }
    pub mod catalog {
        pub mod core {
            pub mod course;
            pub mod schedule;
            pub mod testimonial;
        }
        pub mod seed;
        pub mod use_cases {
            pub mod browse_catalog {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod registrations {
        pub mod core {
            pub mod payment_status;
            pub mod registration;
        }
        pub mod use_cases {
            pub mod register_for_course {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod process_payment {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reconcile_payment {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod checkout {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sweep_abandoned {
                pub mod handler;
            }
        }
    }
    pub mod inquiries {
        pub mod core {
            pub mod inquiry;
        }
        pub mod use_cases {
            pub mod submit_inquiry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
