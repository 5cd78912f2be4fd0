pub mod application {
    pub mod firebase_config {
        pub mod delete;
        pub mod get_status;
        pub mod upload;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod firebase_config {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod delete;
            pub mod get_status;
            pub mod upload;
        }
    }
    pub mod settings {
        pub mod keys;
        pub mod repository;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
