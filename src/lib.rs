pub mod shared {
    pub mod infrastructure {
        pub mod cafe_store;
    }
}

pub mod modules {
    pub mod cafes {
        pub mod core {
            pub mod cafe;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_cafes {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_cafe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_cafe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_cafe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_cafe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
