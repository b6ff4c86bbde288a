pub mod application {
    pub mod product {
        pub mod bulk_create;
        pub mod bulk_update;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        mod logging;
        pub mod partial_update;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod bulk_create;
            pub mod bulk_update;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod partial_update;
        }
    }
}
