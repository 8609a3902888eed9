//! Child lookups built on the address scan prefixes.

use mda_address::MetadataAddress;

use crate::error::StoreResult;
use crate::page::{Page, PageRequest};
use crate::traits::MetadataStore;

fn addresses_under<S>(store: &S, prefix: &[u8], page: &PageRequest) -> StoreResult<Page<MetadataAddress>>
where
    S: MetadataStore + ?Sized,
{
    Ok(store.iterate_prefix(prefix, page)?.map(|(addr, _)| addr))
}

/// Sessions stored under the scope of `scope`.
///
/// `scope` may be any scope, session, or record address. The empty
/// address lists every session.
pub fn sessions_in_scope<S>(
    store: &S,
    scope: &MetadataAddress,
    page: &PageRequest,
) -> StoreResult<Page<MetadataAddress>>
where
    S: MetadataStore + ?Sized,
{
    let prefix = scope.scope_sessions_prefix()?;
    addresses_under(store, &prefix, page)
}

/// Records stored under the scope of `scope`.
pub fn records_in_scope<S>(
    store: &S,
    scope: &MetadataAddress,
    page: &PageRequest,
) -> StoreResult<Page<MetadataAddress>>
where
    S: MetadataStore + ?Sized,
{
    let prefix = scope.scope_records_prefix()?;
    addresses_under(store, &prefix, page)
}

/// Record specifications stored under the contract specification of
/// `contract_spec`.
pub fn record_specs_in_contract_spec<S>(
    store: &S,
    contract_spec: &MetadataAddress,
    page: &PageRequest,
) -> StoreResult<Page<MetadataAddress>>
where
    S: MetadataStore + ?Sized,
{
    let prefix = contract_spec.contract_spec_record_specs_prefix()?;
    addresses_under(store, &prefix, page)
}
