pub mod create_subscription;
