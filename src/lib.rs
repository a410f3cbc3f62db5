pub mod modules {
    pub mod movies {
        pub mod core {
            pub mod movie;
        }
        pub mod use_cases {
            pub mod list_movies {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_movie {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_movie {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_movie {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_movie {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_responses;
            }
            pub mod outbound {
                pub mod movie_store;
                pub mod movie_store_in_memory;
            }
        }
    }
}

pub mod shell;
