use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "mda",
    about = "Metadata addresses: encode, decode, derive, and inspect",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an address from its identity components
    Encode(EncodeArgs),
    /// Decode a bech32 address
    Decode(AddressArgs),
    /// Break an address (bech32 or 0x-prefixed hex) into its components
    Details(AddressArgs),
    /// Build an address from a hex type code and a base64 hash
    FromHash(FromHashArgs),
    /// Show the parent of a session, record, or record specification
    Parent(AddressArgs),
    /// Derive a child address
    Child(ChildArgs),
    /// Show the scan prefix for the children of an address
    Prefix(PrefixArgs),
    /// Show the asset denom of an address
    Denom(AddressArgs),
    /// Recover an address from its asset denom
    FromDenom(FromDenomArgs),
    /// Validate account-to-scope links
    Links(LinksArgs),
    /// List the children of a parent among a set of addresses
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct AddressArgs {
    pub address: String,
}

#[derive(Args)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub target: EncodeTarget,
}

/// Omitted UUIDs are generated.
#[derive(Subcommand)]
pub enum EncodeTarget {
    Scope {
        #[arg(long)]
        scope: Option<Uuid>,
    },
    Session {
        #[arg(long)]
        scope: Option<Uuid>,
        #[arg(long)]
        session: Option<Uuid>,
    },
    Record {
        name: String,
        #[arg(long)]
        scope: Option<Uuid>,
    },
    ContractSpec {
        #[arg(long)]
        contract_spec: Option<Uuid>,
    },
    ScopeSpec {
        #[arg(long)]
        scope_spec: Option<Uuid>,
    },
    RecordSpec {
        name: String,
        #[arg(long)]
        contract_spec: Option<Uuid>,
    },
}

#[derive(Args)]
pub struct FromHashArgs {
    /// Type code in hex; only the first byte is used
    pub type_code: String,
    /// Standard base64 hash
    pub hash: String,
}

#[derive(Args)]
pub struct ChildArgs {
    #[command(subcommand)]
    pub target: ChildTarget,
}

#[derive(Subcommand)]
pub enum ChildTarget {
    /// A session in the address's scope
    Session { address: String, session: Option<Uuid> },
    /// A named record in the address's scope
    Record { address: String, name: String },
    /// A named record specification under the address's contract specification
    Recspec { address: String, name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ChildKind {
    Sessions,
    Records,
    Recspecs,
}

#[derive(Args)]
pub struct PrefixArgs {
    pub kind: ChildKind,
    /// Parent address; omitted means every address of the kind
    pub address: Option<String>,
}

#[derive(Args)]
pub struct FromDenomArgs {
    pub denom: String,
}

#[derive(Args)]
pub struct LinksArgs {
    /// `<account>=<scope address>` pairs; either side may be empty
    #[arg(required = true)]
    pub links: Vec<String>,
}

#[derive(Args)]
pub struct ScanArgs {
    pub kind: ChildKind,
    pub parent: String,
    /// Addresses to load into the store before scanning
    pub addresses: Vec<String>,
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_encode_scope() {
        let cli = Cli::try_parse_from(["mda", "encode", "scope"]).unwrap();
        if let Command::Encode(args) = cli.command {
            assert!(matches!(args.target, EncodeTarget::Scope { scope: None }));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_encode_record() {
        let cli = Cli::try_parse_from([
            "mda", "encode", "record", "recordname",
            "--scope", "91978ba2-5f35-459a-86a7-feca1b0512e0",
        ]).unwrap();
        if let Command::Encode(EncodeArgs { target: EncodeTarget::Record { name, scope } }) = cli.command {
            assert_eq!(name, "recordname");
            assert_eq!(scope, Some(Uuid::parse_str("91978ba2-5f35-459a-86a7-feca1b0512e0").unwrap()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_encode_rejects_bad_uuid() {
        assert!(Cli::try_parse_from(["mda", "encode", "scope", "--scope", "nope"]).is_err());
    }

    #[test]
    fn parse_decode() {
        let cli = Cli::try_parse_from(["mda", "decode", "scope1qzge0zaztu65tx5x5llv5xc9ztsqxlkwel"]).unwrap();
        if let Command::Decode(args) = cli.command {
            assert_eq!(args.address, "scope1qzge0zaztu65tx5x5llv5xc9ztsqxlkwel");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_from_hash() {
        let cli = Cli::try_parse_from(["mda", "from-hash", "02", "6qmgVJrNt6LjhY61t7nRvg=="]).unwrap();
        if let Command::FromHash(args) = cli.command {
            assert_eq!(args.type_code, "02");
            assert_eq!(args.hash, "6qmgVJrNt6LjhY61t7nRvg==");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_child_session_without_uuid() {
        let cli = Cli::try_parse_from(["mda", "child", "session", "scope1x"]).unwrap();
        if let Command::Child(ChildArgs { target: ChildTarget::Session { address, session } }) = cli.command {
            assert_eq!(address, "scope1x");
            assert!(session.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_prefix_without_address() {
        let cli = Cli::try_parse_from(["mda", "prefix", "recspecs"]).unwrap();
        if let Command::Prefix(args) = cli.command {
            assert_eq!(args.kind, ChildKind::Recspecs);
            assert!(args.address.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_links_requires_pairs() {
        assert!(Cli::try_parse_from(["mda", "links"]).is_err());
        let cli = Cli::try_parse_from(["mda", "links", "pb1a=scope1b", "pb1c=scope1d"]).unwrap();
        if let Command::Links(args) = cli.command {
            assert_eq!(args.links.len(), 2);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_scan_with_limit() {
        let cli = Cli::try_parse_from(["mda", "scan", "sessions", "scope1p", "session1a", "-n", "5"]).unwrap();
        if let Command::Scan(args) = cli.command {
            assert_eq!(args.kind, ChildKind::Sessions);
            assert_eq!(args.addresses, vec!["session1a"]);
            assert_eq!(args.limit, Some(5));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "mda", "--verbose", "--format", "json", "--config", "mda.toml", "denom", "scope1x",
        ]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.config, Some(PathBuf::from("mda.toml")));
    }
}
