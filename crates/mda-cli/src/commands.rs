use anyhow::{bail, Context};
use colored::Colorize;
use mda_address::{AddressKind, MetadataAddress};
use mda_links::{AccMdLink, AccMdLinks};
use mda_store::{InMemoryMetadataStore, MetadataStore, Page, PageRequest};
use mda_types::AccountId;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cli::*;
use crate::config::CliConfig;

struct Ctx {
    format: OutputFormat,
    config: CliConfig,
}

impl Ctx {
    fn json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    if !config.color {
        colored::control::set_override(false);
    }
    debug!(?config, "loaded configuration");
    let ctx = Ctx { format: cli.format, config };

    match cli.command {
        Command::Encode(args) => cmd_encode(&ctx, args),
        Command::Decode(args) => cmd_decode(&ctx, args),
        Command::Details(args) => cmd_details(&ctx, args),
        Command::FromHash(args) => cmd_from_hash(&ctx, args),
        Command::Parent(args) => cmd_parent(&ctx, args),
        Command::Child(args) => cmd_child(&ctx, args),
        Command::Prefix(args) => cmd_prefix(&ctx, args),
        Command::Denom(args) => cmd_denom(&ctx, args),
        Command::FromDenom(args) => cmd_from_denom(&ctx, args),
        Command::Links(args) => cmd_links(&ctx, args),
        Command::Scan(args) => cmd_scan(&ctx, args),
    }
}

fn parse_address(input: &str) -> anyhow::Result<MetadataAddress> {
    MetadataAddress::from_text(input.trim())
        .with_context(|| format!("invalid metadata address {input:?}"))
}

/// Accept bech32 text, or `0x` hex for addresses that do not decode.
fn parse_address_lenient(input: &str) -> anyhow::Result<MetadataAddress> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix("0x") {
        return MetadataAddress::from_hex(hex).with_context(|| format!("invalid hex {input:?}"));
    }
    match MetadataAddress::from_text(input) {
        Ok(addr) => Ok(addr),
        Err(text_err) => {
            warn!(error = %text_err, "not a valid bech32 address, trying hex");
            MetadataAddress::from_hex(input)
                .with_context(|| format!("{input:?} is neither a metadata address nor hex"))
        }
    }
}

fn or_generate(id: Option<Uuid>) -> Uuid {
    id.unwrap_or_else(|| {
        let id = Uuid::now_v7();
        debug!(%id, "generated uuid");
        id
    })
}

fn print_address(ctx: &Ctx, label: &str, addr: &MetadataAddress) -> anyhow::Result<()> {
    if ctx.json() {
        let kind = addr.tagged_kind().map(AddressKind::formal_name);
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "address": addr,
                "kind": kind,
                "hex": addr.to_hex(),
            }))?
        );
    } else {
        println!("{} {}", format!("{label}:").dimmed(), addr.to_string().cyan().bold());
    }
    Ok(())
}

fn cmd_encode(ctx: &Ctx, args: EncodeArgs) -> anyhow::Result<()> {
    let addr = match args.target {
        EncodeTarget::Scope { scope } => MetadataAddress::scope(or_generate(scope)),
        EncodeTarget::Session { scope, session } => {
            MetadataAddress::session(or_generate(scope), or_generate(session))
        }
        EncodeTarget::Record { name, scope } => MetadataAddress::record(or_generate(scope), &name)?,
        EncodeTarget::ContractSpec { contract_spec } => {
            MetadataAddress::contract_spec(or_generate(contract_spec))
        }
        EncodeTarget::ScopeSpec { scope_spec } => MetadataAddress::scope_spec(or_generate(scope_spec)),
        EncodeTarget::RecordSpec { name, contract_spec } => {
            MetadataAddress::record_spec(or_generate(contract_spec), &name)?
        }
    };
    print_address(ctx, "address", &addr)
}

fn cmd_decode(ctx: &Ctx, args: AddressArgs) -> anyhow::Result<()> {
    let (addr, prefix) = MetadataAddress::parse_text(args.address.trim())
        .with_context(|| format!("invalid metadata address {:?}", args.address))?;
    let id = addr.to_id()?;
    if ctx.json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "address": addr,
                "prefix": prefix,
                "kind": id.kind().formal_name(),
                "primary_uuid": id.primary_uuid(),
                "secondary_uuid": addr.secondary_uuid().ok(),
                "name_hash": addr.name_hash().ok().map(|h| h.to_hex()),
                "hex": addr.to_hex(),
            }))?
        );
    } else {
        println!("{} {}", id.kind().formal_name().bold(), addr.to_string().cyan());
        println!("  Prefix: {}", prefix);
        println!("  Primary UUID: {}", id.primary_uuid().to_string().yellow());
        if let Ok(secondary) = addr.secondary_uuid() {
            println!("  Secondary UUID: {}", secondary.to_string().yellow());
        }
        if let Ok(hash) = addr.name_hash() {
            println!("  Name hash: {}", hash.to_hex().yellow());
        }
        println!("  Hex: {}", addr.to_hex().dimmed());
    }
    Ok(())
}

fn cmd_details(ctx: &Ctx, args: AddressArgs) -> anyhow::Result<()> {
    let details = parse_address_lenient(&args.address)?.details();
    if ctx.json() {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    let valid = details.address.validate();
    let status = match &valid {
        Ok(_) => "valid".green(),
        Err(_) => "invalid".red(),
    };
    println!("{} ({})", details.address.to_string().cyan().bold(), status);
    if let Err(e) = valid {
        println!("  {} {}", "Reason:".red(), e);
    }
    let rows = [
        ("Prefix", &details.prefix),
        ("Primary UUID", &details.primary_uuid),
        ("Secondary UUID", &details.secondary_uuid),
        ("Name hash (hex)", &details.name_hash_hex),
        ("Name hash (base64)", &details.name_hash_base64),
        ("Excess (hex)", &details.excess_hex),
        ("Excess (base64)", &details.excess_base64),
    ];
    for (label, value) in rows {
        if !value.is_empty() {
            println!("  {label}: {}", value.yellow());
        }
    }
    if !details.parent_address.is_empty() {
        println!("  Parent: {}", details.parent_address.to_string().cyan());
    }
    Ok(())
}

fn cmd_from_hash(ctx: &Ctx, args: FromHashArgs) -> anyhow::Result<()> {
    let code = args.type_code.trim().trim_start_matches("0x");
    let type_code = hex::decode(code).with_context(|| format!("invalid type code {code:?}"))?;
    let addr = MetadataAddress::from_type_code_and_hash(&type_code, args.hash.trim())?;
    print_address(ctx, "address", &addr)
}

fn cmd_parent(ctx: &Ctx, args: AddressArgs) -> anyhow::Result<()> {
    let addr = parse_address(&args.address)?;
    match addr.parent() {
        Some(parent) => print_address(ctx, "parent", &parent),
        None => bail!("{} has no parent address", addr),
    }
}

fn cmd_child(ctx: &Ctx, args: ChildArgs) -> anyhow::Result<()> {
    let child = match args.target {
        ChildTarget::Session { address, session } => {
            parse_address(&address)?.as_session(or_generate(session))?
        }
        ChildTarget::Record { address, name } => parse_address(&address)?.as_record(&name)?,
        ChildTarget::Recspec { address, name } => parse_address(&address)?.as_record_spec(&name)?,
    };
    print_address(ctx, "child", &child)
}

fn scan_prefix(kind: ChildKind, parent: &MetadataAddress) -> anyhow::Result<Vec<u8>> {
    let prefix = match kind {
        ChildKind::Sessions => parent.scope_sessions_prefix()?,
        ChildKind::Records => parent.scope_records_prefix()?,
        ChildKind::Recspecs => parent.contract_spec_record_specs_prefix()?,
    };
    Ok(prefix)
}

fn cmd_prefix(ctx: &Ctx, args: PrefixArgs) -> anyhow::Result<()> {
    let parent = match &args.address {
        Some(text) => parse_address(text)?,
        None => MetadataAddress::empty(),
    };
    let prefix = scan_prefix(args.kind, &parent)?;
    if ctx.json() {
        println!("{}", serde_json::to_string_pretty(&json!({ "prefix": hex::encode(&prefix) }))?);
    } else {
        println!("{} {}", "prefix:".dimmed(), hex::encode(&prefix).yellow());
    }
    Ok(())
}

fn cmd_denom(ctx: &Ctx, args: AddressArgs) -> anyhow::Result<()> {
    let denom = parse_address(&args.address)?.denom();
    if ctx.json() {
        println!("{}", serde_json::to_string_pretty(&json!({ "denom": denom }))?);
    } else {
        println!("{}", denom.cyan());
    }
    Ok(())
}

fn cmd_from_denom(ctx: &Ctx, args: FromDenomArgs) -> anyhow::Result<()> {
    let addr = MetadataAddress::from_denom(args.denom.trim())?;
    print_address(ctx, "address", &addr)
}

/// Parse `<account>=<address>`. An empty side yields an empty value.
fn parse_link(pair: &str, account_hrp: &str) -> anyhow::Result<AccMdLink> {
    let (account, address) = pair
        .split_once('=')
        .with_context(|| format!("expected <account>=<address>, got {pair:?}"))?;
    let account = match account.trim() {
        "" => AccountId::empty(),
        text => AccountId::from_bech32_with_prefix(text, account_hrp)
            .with_context(|| format!("invalid account {text:?}"))?,
    };
    let address = match address.trim() {
        "" => MetadataAddress::empty(),
        text => parse_address(text)?,
    };
    Ok(AccMdLink::new(account, address))
}

fn cmd_links(ctx: &Ctx, args: LinksArgs) -> anyhow::Result<()> {
    let links = args
        .links
        .iter()
        .map(|pair| parse_link(pair, &ctx.config.account_hrp))
        .collect::<anyhow::Result<AccMdLinks>>()?;
    links.validate_for_scopes()?;

    let accounts: Vec<String> = links.accounts().iter().map(ToString::to_string).collect();
    let uuids = links.primary_uuids();
    if ctx.json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "links": links.to_string(),
                "accounts": accounts,
                "primary_uuids": uuids,
            }))?
        );
    } else {
        println!("{} {} links valid", "✓".green().bold(), links.len());
        for account in &accounts {
            println!("  Account: {}", account.yellow());
            for addr in links.addresses_for_account(account) {
                println!("    {}", addr.to_string().cyan());
            }
        }
        for id in &uuids {
            println!("  Scope UUID: {}", id);
        }
    }
    Ok(())
}

fn cmd_scan(ctx: &Ctx, args: ScanArgs) -> anyhow::Result<()> {
    let parent = parse_address(&args.parent)?;
    let store = InMemoryMetadataStore::new();
    for text in &args.addresses {
        store.put(&parse_address(text)?, Vec::new())?;
    }

    let limit = args.limit.unwrap_or(ctx.config.default_page_limit);
    let page: Page<MetadataAddress> = match args.kind {
        ChildKind::Sessions => mda_store::sessions_in_scope(&store, &parent, &PageRequest::new(limit))?,
        ChildKind::Records => mda_store::records_in_scope(&store, &parent, &PageRequest::new(limit))?,
        ChildKind::Recspecs => {
            mda_store::record_specs_in_contract_spec(&store, &parent, &PageRequest::new(limit))?
        }
    };

    if ctx.json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "items": page.items,
                "total": page.response.total,
                "next_key": page.response.next_key.as_deref().map(hex::encode),
            }))?
        );
    } else {
        for addr in &page.items {
            println!("{}", addr.to_string().cyan());
        }
        println!(
            "{} of {} shown",
            page.items.len().to_string().bold(),
            page.response.total.to_string().bold()
        );
        if let Some(next) = &page.response.next_key {
            println!("  Next: {}", MetadataAddress::from_raw(next.clone()).to_string().dimmed());
        }
    }
    Ok(())
}
