//! Types representing a parsed recipe

use std::collections::BTreeMap;

use crate::language::Quantity;

#[derive(Eq, Debug, Default, PartialEq)]
pub struct Recipe<'i> {
    pub steps: Vec<Step<'i>>,
    pub metadata: BTreeMap<String, String>,
}

/// One paragraph of the method. The annotation lists are each in ascending
/// order of their offset into `directions`.
#[derive(Eq, Debug, Default, PartialEq)]
pub struct Step<'i> {
    pub directions: String,
    pub ingredients: Vec<Ingredient<'i>>,
    pub cookware: Vec<Cookware<'i>>,
    pub timers: Vec<Timer<'i>>,
}

#[derive(Eq, Debug, Clone, Copy, Default, PartialEq)]
pub struct Amount<'i> {
    pub quantity: Quantity<'i>,
    pub unit: Option<&'i str>,
}

#[derive(Eq, Debug, Clone, Copy, PartialEq)]
pub struct Ingredient<'i> {
    pub name: &'i str,
    pub amount: Amount<'i>,
    pub idx: usize,
}

// Cookware is counted, never measured, so there is no unit here.
#[derive(Eq, Debug, Clone, Copy, PartialEq)]
pub struct Cookware<'i> {
    pub name: &'i str,
    pub quantity: Quantity<'i>,
    pub idx: usize,
}

#[derive(Eq, Debug, Clone, Copy, PartialEq)]
pub struct Timer<'i> {
    pub name: Option<&'i str>,
    pub duration: Quantity<'i>,
    pub unit: Option<&'i str>,
    pub idx: usize,
}

/// A single parsed annotation of any kind, as produced by the annotation
/// parser and as handed back by [`Step::annotations`].
#[derive(Eq, Debug, Clone, Copy, PartialEq)]
pub enum Annotation<'i> {
    Ingredient(Ingredient<'i>),
    Cookware(Cookware<'i>),
    Timer(Timer<'i>),
}

impl<'i> Annotation<'i> {
    /// The name as it appears in the rendered directions. Anonymous timers
    /// contribute nothing.
    pub fn name(&self) -> &'i str {
        match self {
            Annotation::Ingredient(ingredient) => ingredient.name,
            Annotation::Cookware(cookware) => cookware.name,
            Annotation::Timer(timer) => timer
                .name
                .unwrap_or(""),
        }
    }

    pub fn idx(&self) -> usize {
        match self {
            Annotation::Ingredient(ingredient) => ingredient.idx,
            Annotation::Cookware(cookware) => cookware.idx,
            Annotation::Timer(timer) => timer.idx,
        }
    }

    pub(crate) fn set_idx(&mut self, idx: usize) {
        match self {
            Annotation::Ingredient(ingredient) => ingredient.idx = idx,
            Annotation::Cookware(cookware) => cookware.idx = idx,
            Annotation::Timer(timer) => timer.idx = idx,
        }
    }
}

impl<'i> Step<'i> {
    /// All annotations of this step merged into a single sequence ordered
    /// by offset. Where an anonymous timer shares its offset with a named
    /// annotation, the timer comes first, as it was necessarily declared
    /// first.
    pub fn annotations(&self) -> Vec<Annotation<'i>> {
        let mut result: Vec<Annotation<'i>> = self
            .ingredients
            .iter()
            .copied()
            .map(Annotation::Ingredient)
            .chain(
                self.cookware
                    .iter()
                    .copied()
                    .map(Annotation::Cookware),
            )
            .chain(
                self.timers
                    .iter()
                    .copied()
                    .map(Annotation::Timer),
            )
            .collect();

        result.sort_by_key(|annotation| {
            (
                annotation.idx(),
                !annotation
                    .name()
                    .is_empty(),
            )
        });

        result
    }

    pub fn is_empty(&self) -> bool {
        self.directions
            .is_empty()
            && self
                .ingredients
                .is_empty()
            && self
                .cookware
                .is_empty()
            && self
                .timers
                .is_empty()
    }
}

impl<'i> Recipe<'i> {
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient<'i>> {
        self.steps
            .iter()
            .flat_map(|step| step.ingredients.iter())
    }

    pub fn cookware(&self) -> impl Iterator<Item = &Cookware<'i>> {
        self.steps
            .iter()
            .flat_map(|step| step.cookware.iter())
    }

    pub fn timers(&self) -> impl Iterator<Item = &Timer<'i>> {
        self.steps
            .iter()
            .flat_map(|step| step.timers.iter())
    }
}
