use crate::Identifier;
use semistr::SemiStr;
use smallvec::{smallvec, SmallVec};

/// Dialect-specific mapping from a partially-qualified identifier to the
/// ordered candidate names probed against a catalog.
///
/// `resolve_order` is pure and synchronous. It only accepts identifiers
/// that already passed construction-time validation, so it is total: it
/// never fails and never yields an empty sequence.
pub trait IdentifierResolver {
    fn resolve_order(&self, id: &Identifier) -> ResolutionOrder;
}

/// Candidate identifiers, first-to-last in probe priority, deduplicated.
/// Consumed once; at most four candidates exist regardless of name length.
pub struct ResolutionOrder {
    candidates: smallvec::IntoIter<[Identifier; 4]>,
}

impl ResolutionOrder {
    #[inline]
    fn new(candidates: SmallVec<[Identifier; 4]>) -> Self {
        debug_assert!(!candidates.is_empty());
        ResolutionOrder {
            candidates: candidates.into_iter(),
        }
    }
}

impl Iterator for ResolutionOrder {
    type Item = Identifier;

    #[inline]
    fn next(&mut self) -> Option<Identifier> {
        self.candidates.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

impl ExactSizeIterator for ResolutionOrder {}

/// Policy for engines that store unquoted identifiers lower-cased
/// (PostgreSQL).
///
/// Server and database are folded to lower-case and never varied; the
/// engine does not use them to disambiguate within a connection. Schema
/// and local name each contribute their folded form, plus the original
/// form when the two differ. Candidates are emitted schema-major:
///
/// 1. folded schema, folded local name
/// 2. folded schema, original local name
/// 3. original schema, folded local name
/// 4. original schema, original local name
///
/// The fully folded pair leads because an unquoted name matches it with a
/// single catalog probe; the original pair trails for quoted names. The
/// intermediate order is a fixed convention kept for compatibility with
/// existing catalog readers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCaseResolver;

impl IdentifierResolver for LowerCaseResolver {
    #[inline]
    fn resolve_order(&self, id: &Identifier) -> ResolutionOrder {
        folded_order(id, Fold::Lower)
    }
}

/// Mirror of [`LowerCaseResolver`] for engines that fold unquoted
/// identifiers to upper-case.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCaseResolver;

impl IdentifierResolver for UpperCaseResolver {
    #[inline]
    fn resolve_order(&self, id: &Identifier) -> ResolutionOrder {
        folded_order(id, Fold::Upper)
    }
}

/// Single-candidate policy for engines that store identifiers exactly as
/// written, or compare them case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimResolver;

impl IdentifierResolver for VerbatimResolver {
    #[inline]
    fn resolve_order(&self, id: &Identifier) -> ResolutionOrder {
        ResolutionOrder::new(smallvec![id.clone()])
    }
}

#[derive(Debug, Clone, Copy)]
enum Fold {
    Lower,
    Upper,
}

impl Fold {
    #[inline]
    fn varies(self, part: &str) -> bool {
        match self {
            Fold::Lower => part.chars().any(char::is_uppercase),
            Fold::Upper => part.chars().any(char::is_lowercase),
        }
    }

    #[inline]
    fn apply(self, part: &str) -> SemiStr {
        match self {
            Fold::Lower => SemiStr::new(&part.to_lowercase()),
            Fold::Upper => SemiStr::new(&part.to_uppercase()),
        }
    }

    /// Folded form first, original second when the part varies.
    #[inline]
    fn variants(self, part: &str) -> SmallVec<[SemiStr; 2]> {
        if self.varies(part) {
            smallvec![self.apply(part), SemiStr::new(part)]
        } else {
            smallvec![SemiStr::new(part)]
        }
    }
}

fn folded_order(id: &Identifier, fold: Fold) -> ResolutionOrder {
    let server = id.server().map(|p| fold.apply(p));
    let database = id.database().map(|p| fold.apply(p));
    let schemas: SmallVec<[Option<SemiStr>; 2]> = match id.schema() {
        None => smallvec![None],
        Some(p) => fold.variants(p).into_iter().map(Some).collect(),
    };
    let locals = fold.variants(id.local_name());

    let mut out: SmallVec<[Identifier; 4]> = SmallVec::new();
    for schema in &schemas {
        for local in &locals {
            let candidate = Identifier {
                server: server.clone(),
                database: database.clone(),
                schema: schema.clone(),
                local_name: local.clone(),
            };
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        }
    }
    ResolutionOrder::new(out)
}
