// File: crates/pie-core/src/pie.rs
// Summary: PieLayout component: owns series, configuration, cached wedges, and selection.
// Notes:
// - Wedges and geometry are recomputed on every data or configuration change and
//   never patched in place.
// - `tap` is the only writer of the selection besides `set_selection`.

use tracing::debug;

use crate::arc::{path_params, ArcParams};
use crate::error::{PieError, Result};
use crate::geometry::{ChartGeometry, Point};
use crate::hit::hit_test;
use crate::label::{floating_label, FloatingLabel};
use crate::layout::{layout_or_equal, layout_with, LayoutOptions, WedgeDescriptor};
use crate::selection::{apply_hit, ItemSelected, SelectionState};
use crate::series::DataItem;
use crate::types::{ArcStyle, PieConfig};

#[derive(Clone, Debug)]
pub struct PieLayout {
    data: Vec<DataItem>,
    config: PieConfig,
    style: ArcStyle,
    options: LayoutOptions,
    equal_fallback: bool,
    geometry: ChartGeometry,
    wedges: Vec<WedgeDescriptor>,
    selection: SelectionState,
}

impl PieLayout {
    pub fn new(data: Vec<DataItem>, config: PieConfig) -> Result<Self> {
        Self::build(data, config, false)
    }

    /// Like [`PieLayout::new`], but an all-zero or empty series lays out as equal wedges
    /// (or nothing) instead of failing.
    pub fn with_equal_fallback(data: Vec<DataItem>, config: PieConfig) -> Result<Self> {
        Self::build(data, config, true)
    }

    fn build(data: Vec<DataItem>, config: PieConfig, equal_fallback: bool) -> Result<Self> {
        let mut pie = Self {
            data: Vec::new(),
            config,
            style: ArcStyle::default(),
            options: LayoutOptions::default(),
            equal_fallback,
            geometry: ChartGeometry::from_config(&config)?,
            wedges: Vec::new(),
            selection: SelectionState::default(),
        };
        pie.set_data(data)?;
        Ok(pie)
    }

    pub fn with_style(mut self, style: ArcStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Result<Self> {
        self.options = options;
        self.wedges = self.run_layout(&self.data)?;
        Ok(self)
    }

    pub fn data(&self) -> &[DataItem] { &self.data }
    pub fn config(&self) -> &PieConfig { &self.config }
    pub fn style(&self) -> &ArcStyle { &self.style }
    pub fn geometry(&self) -> &ChartGeometry { &self.geometry }
    pub fn wedges(&self) -> &[WedgeDescriptor] { &self.wedges }
    pub fn selection(&self) -> SelectionState { self.selection }

    /// Replace the series. On error the previous data and wedges are kept.
    pub fn set_data(&mut self, data: Vec<DataItem>) -> Result<()> {
        let wedges = self.run_layout(&data)?;
        self.selection = self.selection.clamped(data.len());
        self.data = data;
        self.wedges = wedges;
        Ok(())
    }

    /// Replace the configuration. On error the previous geometry is kept.
    pub fn set_config(&mut self, config: PieConfig) -> Result<()> {
        self.geometry = ChartGeometry::from_config(&config)?;
        self.config = config;
        Ok(())
    }

    pub fn set_selection(&mut self, selection: SelectionState) {
        self.selection = selection.clamped(self.data.len());
    }

    /// Drawing parameters for every wedge, in input order.
    pub fn arcs(&self) -> impl Iterator<Item = ArcParams> + '_ {
        self.wedges
            .iter()
            .map(move |w| path_params(w, &self.geometry, &self.style, self.selection.is_highlighted(w.index)))
    }

    pub fn label(&self) -> Option<FloatingLabel<'_>> {
        floating_label(&self.data, &self.selection, &self.geometry)
    }

    /// Hit-test `point`; on a hit, update the selection and notify `on_selected` once.
    pub fn tap(&mut self, point: Point, on_selected: &mut impl ItemSelected) -> Option<usize> {
        let hit = hit_test(point, &self.geometry, &self.wedges);
        self.selection = apply_hit(self.selection, hit);
        if let Some(index) = hit {
            debug!(index, "item selected");
            on_selected.item_selected(index);
        }
        hit
    }

    fn run_layout(&self, data: &[DataItem]) -> Result<Vec<WedgeDescriptor>> {
        if self.equal_fallback {
            layout_or_equal(data, &self.options)
        } else {
            layout_with(data, &self.options)
        }
    }
}

impl TryFrom<Vec<DataItem>> for PieLayout {
    type Error = PieError;

    fn try_from(data: Vec<DataItem>) -> Result<Self> {
        Self::new(data, PieConfig::default())
    }
}
