#[cfg(feature = "serde")]
use serde::Serialize;

/// One value for each element of a filter leg.
///
/// Every per-element result (currents, voltages, powers, report strings) is
/// held in this record so all four elements are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PerElement<T> {
    /// Damping resistor `R`.
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    pub resistor: T,

    /// Lossy inductor `r + jωL`.
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub inductor: T,

    /// Series capacitor `C`.
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub capacitor: T,

    /// The whole filter leg, seen from its terminals.
    #[cfg_attr(feature = "serde", serde(rename = "Filtro"))]
    pub filter: T,
}

impl<T> PerElement<T> {
    /// Applies `f` to every element, preserving the layout.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerElement<U> {
        PerElement {
            resistor: f(self.resistor),
            inductor: f(self.inductor),
            capacitor: f(self.capacitor),
            filter: f(self.filter),
        }
    }

    /// Combines two records element by element.
    pub fn zip_with<U, V>(
        self,
        other: PerElement<U>,
        mut f: impl FnMut(T, U) -> V,
    ) -> PerElement<V> {
        PerElement {
            resistor: f(self.resistor, other.resistor),
            inductor: f(self.inductor, other.inductor),
            capacitor: f(self.capacitor, other.capacitor),
            filter: f(self.filter, other.filter),
        }
    }

    /// Returns `(label, value)` pairs in report order.
    pub fn labeled(&self) -> [(&'static str, &T); 4] {
        [
            ("R", &self.resistor),
            ("L", &self.inductor),
            ("C", &self.capacitor),
            ("Filtro", &self.filter),
        ]
    }
}
