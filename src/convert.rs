use crate::error::GraphError;
use crate::graph::{DEFAULT_SUMMARY, DEFAULT_TITLE, Graph, GuidSource, LayoutConfig, RandomGuids, SequentialGuids};
use crate::serialize;
use crate::source::SourceModel;
use crate::translate::{ScanOrder, Translator};

/// How GUID tokens are generated. Every conversion starts a fresh source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuidStrategy {
    /// Random v4 UUIDs.
    #[default]
    Random,
    /// Counter-based UUIDs, so converting the same text twice gives identical output.
    Sequential,
}

impl GuidStrategy {
    fn source(self) -> Box<dyn GuidSource> {
        match self {
            GuidStrategy::Random => Box::new(RandomGuids),
            GuidStrategy::Sequential => Box::new(SequentialGuids::new()),
        }
    }
}

pub struct ConverterBuilder {
    scan_order: ScanOrder,
    layout: LayoutConfig,
    guids: GuidStrategy,
}

impl ConverterBuilder {
    pub fn scan_order(mut self, order: ScanOrder) -> Self {
        self.scan_order = order;
        self
    }

    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn guids(mut self, strategy: GuidStrategy) -> Self {
        self.guids = strategy;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            translator: Translator::builder().scan_order(self.scan_order).build(),
            layout: self.layout,
            guids: self.guids,
        }
    }
}

/// Runs the whole pipeline: extraction, translation, assembly and serialization.
pub struct Converter {
    translator: Translator,
    layout: LayoutConfig,
    guids: GuidStrategy,
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder {
            scan_order: ScanOrder::default(),
            layout: LayoutConfig::default(),
            guids: GuidStrategy::default(),
        }
    }

    /// Converts C# source text into a graph document.
    pub fn convert(&self, code: &str) -> Result<String, GraphError> {
        serialize::to_json(&self.build_graph(code, None)?)
    }

    /// Like [`Converter::convert`], but names the originating file in the summary.
    pub fn convert_named(&self, code: &str, file_name: &str) -> Result<String, GraphError> {
        serialize::to_json(&self.build_graph(code, Some(file_name))?)
    }

    /// Extracts and translates `code` without serializing it.
    pub fn build_graph(&self, code: &str, file_name: Option<&str>) -> Result<Graph, GraphError> {
        let model = SourceModel::extract(code);
        let mut graph = Graph::with_settings(self.layout, self.guids.source());
        graph.title = model
            .class_name
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        graph.summary = match (file_name, &model.class_name) {
            (Some(file_name), _) => format!("Converted from {}", file_name),
            (None, Some(class_name)) => format!("Converted from {}.cs", class_name),
            (None, None) => DEFAULT_SUMMARY.to_string(),
        };

        let methods = self.translator.translate(&model, &mut graph)?;
        tracing::debug!(
            title = %graph.title,
            scan_order = ?self.translator.scan_order(),
            methods = methods.len(),
            nodes = graph.nodes().len(),
            connections = graph.connections().len(),
            "assembled graph"
        );
        Ok(graph)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::builder().build()
    }
}
