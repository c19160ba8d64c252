use std::path::Path;

use nemaki_core::PropertyValue;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::object::{MkdirArgs, SecondaryArgs, UpdateArgs, UploadArgs};
use crate::commands::shared::parse;
use crate::commands::version::read_upload;
use crate::context::AppContext;
use crate::output::{note, output};
use crate::progress::Progress;

#[derive(Serialize)]
struct DeleteTreeResponse {
    folder_id: String,
    failed_ids: Vec<String>,
}

pub async fn mkdir(args: &MkdirArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let properties = parse::properties(&args.set)?;
    let folder = ctx
        .client
        .create_folder(&args.parent, &args.name, &properties)
        .await?;
    output(&folder, flags.format)
}

pub async fn upload(args: &UploadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut content = read_upload(&args.file)?;
    if let Some(mime_type) = &args.mime_type {
        content.mime_type.clone_from(mime_type);
    }

    let mut properties = parse::properties(&args.set)?;
    let name = args.name.clone().unwrap_or_else(|| content.file_name.clone());
    properties.insert("cmis:name".into(), PropertyValue::Scalar(Value::String(name)));
    if let Some(type_id) = &args.type_id {
        properties.insert(
            "cmis:objectTypeId".into(),
            PropertyValue::Scalar(Value::String(type_id.clone())),
        );
    }

    let label = format!("uploading {}", Path::new(&args.file).display());
    let document = Progress::wrap(
        &label,
        ctx.client.create_document(&args.parent, &properties, content),
    )
    .await?;
    output(&document, flags.format)
}

pub async fn update(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let properties = parse::properties(&args.set)?;
    let updated = ctx
        .client
        .update_properties(&args.id, &properties, args.change_token.as_deref())
        .await?;
    output(&updated, flags.format)
}

pub async fn secondary(args: &SecondaryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let updated = ctx
        .client
        .update_secondary_types(&args.id, &args.add, &args.remove, args.change_token.as_deref())
        .await?;
    output(&updated, flags.format)
}

pub async fn delete_tree(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let failed_ids = Progress::wrap("deleting folder tree", ctx.client.delete_tree(id)).await?;
    if !failed_ids.is_empty() {
        note(
            &format!("{} object(s) under {id} could not be deleted", failed_ids.len()),
            flags.quiet,
        );
    }
    output(
        &DeleteTreeResponse {
            folder_id: id.to_string(),
            failed_ids,
        },
        flags.format,
    )
}
