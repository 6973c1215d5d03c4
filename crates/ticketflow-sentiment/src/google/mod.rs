mod client;

pub use client::{GoogleLanguageClient, GoogleLanguageClientBuilder, GOOGLE_LANGUAGE_API_BASE};
