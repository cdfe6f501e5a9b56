pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod teacher_repository;
    }
}

pub mod modules {
    pub mod timetable {
        pub mod core {
            pub mod assignment;
            pub mod events;
            pub mod evolve;
            pub mod presence;
            pub mod schedule;
            pub mod state;
            pub mod status;
            pub mod teacher;
            pub mod time_slot;
            pub mod weekday;
        }
        pub mod use_cases {
            pub mod commit;
            pub mod decision;
            pub mod errors;
            pub mod register_teacher {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_status {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_profile {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_timetable {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_presence {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
    }
    pub mod calendar {
        pub mod core {
            pub mod academic_calendar;
            pub mod holiday;
        }
        pub mod use_cases {
            pub mod list_holidays {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
