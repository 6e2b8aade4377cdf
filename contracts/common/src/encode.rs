//! Call payload encoding.
//!
//! A proposal action carries the call it will make as opaque bytes. The
//! encoding is the canonical XDR of the `(function, args)` pair, so two
//! payloads are byte-equal exactly when they invoke the same function with
//! the same arguments. The orchestrator never interprets the payload; the
//! executing side decodes it back with [`decode_call`].

use soroban_sdk::{
    contracttype,
    xdr::{FromXdr, ToXdr},
    Address, Bytes, Env, Symbol, TryFromVal, Val, Vec,
};

/// Host type expected for one call parameter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamKind {
    Bool,
    U32,
    U64,
    I128,
    Address,
    Bytes,
    Symbol,
    Str,
}

/// Declared interface of a target function: its export name plus the
/// expected parameter types, in order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallSpec {
    pub function: Symbol,
    pub params: Vec<ParamKind>,
}

/// Failures local to encoding/decoding. These never reach the network.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// Argument count does not match the declared parameter list.
    ArityMismatch,
    /// An argument's host type does not match its declared `ParamKind`.
    TypeMismatch,
    /// The payload bytes do not decode to a `(function, args)` pair.
    MalformedPayload,
}

/// Encode a call against a declared interface.
///
/// Checks arity and per-argument type tags before producing the canonical
/// XDR bytes of `(function, args)`. Pure — no side effects.
pub fn encode_call(env: &Env, spec: &CallSpec, args: &Vec<Val>) -> Result<Bytes, EncodeError> {
    if args.len() != spec.params.len() {
        return Err(EncodeError::ArityMismatch);
    }
    for (kind, arg) in spec.params.iter().zip(args.iter()) {
        if !matches_kind(env, &kind, &arg) {
            return Err(EncodeError::TypeMismatch);
        }
    }
    Ok((spec.function.clone(), args.clone()).to_xdr(env))
}

/// Decode a payload back into its `(function, args)` pair.
pub fn decode_call(env: &Env, payload: &Bytes) -> Result<(Symbol, Vec<Val>), EncodeError> {
    <(Symbol, Vec<Val>)>::from_xdr(env, payload).map_err(|_| EncodeError::MalformedPayload)
}

fn matches_kind(env: &Env, kind: &ParamKind, arg: &Val) -> bool {
    match kind {
        ParamKind::Bool => bool::try_from_val(env, arg).is_ok(),
        ParamKind::U32 => u32::try_from_val(env, arg).is_ok(),
        ParamKind::U64 => u64::try_from_val(env, arg).is_ok(),
        ParamKind::I128 => i128::try_from_val(env, arg).is_ok(),
        ParamKind::Address => Address::try_from_val(env, arg).is_ok(),
        ParamKind::Bytes => Bytes::try_from_val(env, arg).is_ok(),
        ParamKind::Symbol => Symbol::try_from_val(env, arg).is_ok(),
        ParamKind::Str => soroban_sdk::String::try_from_val(env, arg).is_ok(),
    }
}
