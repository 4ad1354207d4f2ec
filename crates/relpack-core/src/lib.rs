mod manifest;

pub use manifest::AppManifest;
