//! Shared fixture: a small project mirroring a typical app + vendored protos layout.
#![allow(dead_code)]

use protodep::project::{DepFileType, Project, ProjectConfig};
use protodep::syntax::{Element, ProtoFile};
use protodep::DepType;

pub const SENDMAIL: &str = "app/core/sendmail.proto";
pub const USER: &str = "app/core/user.proto";
pub const PAGINATION: &str = "app/base/pagination.proto";
pub const DESCRIPTOR: &str = "google/protobuf/descriptor.proto";
pub const TIMESTAMP: &str = "google/protobuf/timestamp.proto";
pub const UUID: &str = "fproto-wrap/uuid.proto";
pub const TIME: &str = "fproto-wrap/time.proto";
pub const JSONTAG: &str = "fproto-wrap/jsontag.proto";
pub const HEADERS: &str = "fproto-wrap-headers/headers.proto";
pub const VALIDATE: &str = "fproto-wrap-validate/validate.proto";

pub fn sample_project() -> Project {
    sample_project_with(ProjectConfig::new())
}

pub fn sample_project_with(config: ProjectConfig) -> Project {
    let mut project = Project::with_config(config);
    for (path, dep_type, file) in sample_files() {
        project.add_file(path, dep_type, file).unwrap();
    }
    project
}

fn sample_files() -> Vec<(&'static str, DepFileType, ProtoFile)> {
    vec![
        (SENDMAIL, DepFileType::Own, sendmail()),
        (TIME, DepFileType::Imported, time()),
        (TIMESTAMP, DepFileType::Imported, timestamp()),
        (DESCRIPTOR, DepFileType::Imported, descriptor()),
        (PAGINATION, DepFileType::Own, pagination()),
        (UUID, DepFileType::Imported, uuid()),
        (JSONTAG, DepFileType::Imported, jsontag()),
        (HEADERS, DepFileType::Imported, headers()),
        (VALIDATE, DepFileType::Imported, validate()),
        (USER, DepFileType::Own, user()),
    ]
}

fn sendmail() -> ProtoFile {
    let mut f = ProtoFile::new("app.core")
        .with_import(UUID)
        .with_import(TIME)
        .with_import(HEADERS)
        .with_import(VALIDATE)
        .with_import(JSONTAG)
        .with_import(USER)
        .with_option("go_package", "example.com/app/core");

    let send_mail = f.add_message(None, "SendMail").unwrap();
    f.add_field(send_mail, "sendmail_id", "fproto_wrap.UUID").unwrap();
    let sent_opt = f.add_oneof(send_mail, "sent_opt").unwrap();
    f.add_field(sent_opt, "sent", "bool").unwrap();
    f.add_field(sent_opt, "sent_at", "fproto_wrap.NullTime").unwrap();
    f.add_field(send_mail, "tries", "int32").unwrap();
    f.add_field(send_mail, "error_message", "string").unwrap();
    f.add_field(send_mail, "last_try_at", "fproto_wrap.NullTime").unwrap();
    f.add_repeated_field(send_mail, "destination_to", "SendMailDestination").unwrap();
    f.add_repeated_field(send_mail, "destination_cc", "SendMailDestination").unwrap();
    f.add_repeated_field(send_mail, "destination_bcc", "SendMailDestination").unwrap();
    f.add_field(send_mail, "subject", "string").unwrap();
    let body = f.add_message(Some(send_mail), "Body").unwrap();
    f.add_field(body, "text", "string").unwrap();
    f.add_field(body, "html", "string").unwrap();
    f.add_field(send_mail, "body", "Body").unwrap();
    f.add_repeated_field(send_mail, "attach", "SendMailAttach").unwrap();
    f.add_field(send_mail, "sender", "User").unwrap();

    let destination = f.add_message(None, "SendMailDestination").unwrap();
    f.add_field(destination, "email", "string").unwrap();
    f.add_field(destination, "name", "string").unwrap();

    let attach = f.add_message(None, "SendMailAttach").unwrap();
    f.add_enum(Some(attach), "attach_type", ["NORMAL", "INLINE"]).unwrap();
    f.add_field(attach, "attach_type", "attach_type").unwrap();
    f.add_field(attach, "content_type", "string").unwrap();
    f.add_field(attach, "headers", "fproto_wrap_headers.Headers").unwrap();
    f.add_field(attach, "filename", "string").unwrap();
    let content_opt = f.add_oneof(attach, "content_opt").unwrap();
    f.add_field(content_opt, "download_url", "string").unwrap();
    f.add_field(content_opt, "content", "bytes").unwrap();
    f
}

fn user() -> ProtoFile {
    let mut f = ProtoFile::new("app.core").with_import(UUID);
    let user = f.add_message(None, "User").unwrap();
    f.add_field(user, "user_id", "fproto_wrap.UUID").unwrap();
    f.add_field(user, "name", "string").unwrap();
    f
}

fn pagination() -> ProtoFile {
    let mut f = ProtoFile::new("app.base");
    let pagination = f.add_message(None, "Pagination").unwrap();
    f.add_field(pagination, "page", "int32").unwrap();
    f
}

fn descriptor() -> ProtoFile {
    let mut f = ProtoFile::new("google.protobuf");
    f.add_message(None, "FileOptions").unwrap();
    f.add_message(None, "MessageOptions").unwrap();
    let field_options = f.add_message(None, "FieldOptions").unwrap();
    f.add_field(field_options, "deprecated", "bool").unwrap();
    f
}

fn timestamp() -> ProtoFile {
    let mut f = ProtoFile::new("google.protobuf");
    let ts = f.add_message(None, "Timestamp").unwrap();
    f.add_field(ts, "seconds", "int64").unwrap();
    f.add_field(ts, "nanos", "int32").unwrap();
    f
}

fn uuid() -> ProtoFile {
    let mut f = ProtoFile::new("fproto_wrap");
    let uuid = f.add_message(None, "UUID").unwrap();
    f.add_field(uuid, "value", "string").unwrap();
    f
}

fn time() -> ProtoFile {
    let mut f = ProtoFile::new("fproto_wrap").with_import(TIMESTAMP);
    let null_time = f.add_message(None, "NullTime").unwrap();
    f.add_field(null_time, "time", "google.protobuf.Timestamp").unwrap();
    f.add_field(null_time, "valid", "bool").unwrap();
    f
}

fn jsontag() -> ProtoFile {
    let mut f = ProtoFile::new("fproto_wrap").with_import(DESCRIPTOR);
    let tag = f.add_message(None, "JSONTag").unwrap();
    f.add_field(tag, "tagname", "string").unwrap();
    let ext = f.add_extend("google.protobuf.FieldOptions");
    f.add_field(ext, "jsontag", "JSONTag").unwrap();
    f
}

fn headers() -> ProtoFile {
    let mut f = ProtoFile::new("fproto_wrap_headers");
    let headers = f.add_message(None, "Headers").unwrap();
    let values = f.add_message(Some(headers), "Values").unwrap();
    f.add_repeated_field(values, "value", "string").unwrap();
    f.add_map_field(headers, "headers", "string", "Values").unwrap();
    f
}

fn validate() -> ProtoFile {
    let mut f = ProtoFile::new("validate").with_import(DESCRIPTOR);
    let ext = f.add_extend("google.protobuf.FieldOptions");
    f.add_field(ext, "field", "FieldValidator").unwrap();
    let validator = f.add_message(None, "FieldValidator").unwrap();
    f.add_field(validator, "required", "bool").unwrap();
    f
}

/// The field-like children (fields, map fields, oneofs) of a type's element.
pub fn fields<'a>(ty: &DepType<'a>) -> Vec<&'a Element> {
    let proto = ty.file().unwrap().proto_file().unwrap();
    ty.item()
        .unwrap()
        .children
        .iter()
        .filter_map(|&id| proto.element(id))
        .filter(|el| el.is_field())
        .collect()
}
