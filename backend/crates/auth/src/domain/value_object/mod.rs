pub mod master_secret;
