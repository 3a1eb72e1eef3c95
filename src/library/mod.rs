//! Geometry Library: the read-only catalog of package outlines and symbols.
//!
//! A [`Catalog`] is built once and then shared by reference with the
//! resolver and the renderers. [`Catalog::shared`] exposes the built-in
//! catalog as process-wide data; tests can build their own with
//! [`Catalog::new`].

pub mod packages;
pub mod symbols;

pub use packages::{
    normalise_id, split_qualifiers, BodyShape, Family, Hole, Lead, LeadKind, Material,
    PackageGeometry, PackageVariant, TabFinish,
};
pub use symbols::{Anchor, SymbolDefinition, SymbolId};

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Immutable catalog of package outlines and symbols.
#[derive(Debug, Clone)]
pub struct Catalog {
    packages: Vec<PackageGeometry>,
    index: HashMap<String, usize>,
    symbols: BTreeMap<SymbolId, SymbolDefinition>,
}

/// A package resolved from a user-supplied identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRef<'c> {
    /// The outline.
    pub geometry: &'c PackageGeometry,
    /// Style modifier from the `@qualifier` suffixes.
    pub variant: PackageVariant,
}

impl Catalog {
    /// Builds a catalog from outlines and symbols.
    ///
    /// Identifiers and aliases are indexed in normalised form. When two
    /// entries claim the same name, the earlier entry keeps it.
    #[must_use]
    pub fn new(packages: Vec<PackageGeometry>, symbols: Vec<SymbolDefinition>) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, geometry) in packages.iter().enumerate() {
            for name in std::iter::once(geometry.id).chain(geometry.aliases.iter().copied()) {
                let key = normalise_id(name);
                if let Some(&existing) = index.get(&key) {
                    if existing != i {
                        tracing::warn!(
                            name,
                            kept = packages[existing].id,
                            dropped = geometry.id,
                            "Duplicate package name in catalog"
                        );
                    }
                    continue;
                }
                index.insert(key, i);
            }
        }

        Self {
            packages,
            index,
            symbols: symbols.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Builds the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            packages::builtin(),
            SymbolId::ALL.into_iter().map(symbols::build).collect(),
        )
    }

    /// The built-in catalog, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Self::builtin)
    }

    /// Looks up an outline by canonical id or alias, ignoring qualifiers.
    #[must_use]
    pub fn package(&self, id: &str) -> Option<&PackageGeometry> {
        let (base, _) = split_qualifiers(id);
        self.index
            .get(&normalise_id(base))
            .map(|&i| &self.packages[i])
    }

    /// Resolves `"DO-35@glass"` into an outline plus variant.
    #[must_use]
    pub fn resolve_package(&self, raw: &str) -> Option<PackageRef<'_>> {
        let (base, qualifiers) = split_qualifiers(raw);
        if base.is_empty() {
            return None;
        }
        let geometry = self.package(base)?;
        Some(PackageRef {
            geometry,
            variant: PackageVariant::from_qualifiers(qualifiers),
        })
    }

    /// Looks up a symbol.
    #[must_use]
    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolDefinition> {
        self.symbols.get(&id)
    }

    /// All outlines in catalog order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageGeometry> {
        self.packages.iter()
    }

    /// All symbols in identifier order.
    pub fn symbols(&self) -> impl Iterator<Item = &SymbolDefinition> {
        self.symbols.values()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_names_are_unique() {
        let mut seen = HashSet::new();
        for g in packages::builtin() {
            for name in std::iter::once(g.id).chain(g.aliases.iter().copied()) {
                assert!(seen.insert(normalise_id(name)), "duplicate name {name}");
            }
        }
    }

    #[test]
    fn aliases_resolve_to_the_canonical_outline() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.package("DO-41").unwrap().id, "DO-204-AL");
        assert_eq!(catalog.package("do35").unwrap().id, "DO-204-AH");
        assert_eq!(catalog.package("TO-126").unwrap().id, "TO-225-AA");
        assert_eq!(catalog.package("sot-23-5l").unwrap().id, "SOT-23-5");
        assert_eq!(catalog.package("5MM ROUND T/H").unwrap().id, "5MM-ROUND-TH");
        assert!(catalog.package("DO-999").is_none());
    }

    #[test]
    fn qualifiers_change_style_not_geometry() {
        let catalog = Catalog::builtin();
        let plain = catalog.resolve_package("DO-35").unwrap();
        let glass = catalog.resolve_package("DO-35@epoxy").unwrap();
        assert!(std::ptr::eq(plain.geometry, glass.geometry));
        assert_eq!(glass.variant.material, Some(Material::Epoxy));
        assert_eq!(plain.variant, PackageVariant::default());
    }

    #[test]
    fn empty_identifier_does_not_resolve() {
        let catalog = Catalog::builtin();
        assert!(catalog.resolve_package("").is_none());
        assert!(catalog.resolve_package("@glass").is_none());
    }

    #[test]
    fn every_symbol_is_present() {
        let catalog = Catalog::shared();
        for id in SymbolId::ALL {
            assert_eq!(catalog.symbol(id).unwrap().id, id);
        }
        assert_eq!(catalog.symbols().count(), SymbolId::ALL.len());
    }

    #[test]
    fn substitute_catalog_only_knows_its_entries() {
        let catalog = Catalog::new(
            packages::builtin().into_iter().filter(|g| g.id == "TO-92").collect(),
            vec![symbols::build(SymbolId::Npn)],
        );
        assert!(catalog.package("TO-92").is_some());
        assert!(catalog.package("DO-41").is_none());
        assert!(catalog.symbol(SymbolId::Pnp).is_none());
    }
}
