//! Result certificate rendering.

mod certificate;

pub use certificate::{
    CertificateOptions, attachment_file_name, format_certificate, format_certificate_with_options,
};
