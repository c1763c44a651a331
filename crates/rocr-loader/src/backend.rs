/// Engine backend families shipped as separate packaged variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// ONNX Runtime build of the engine.
    Onnx,
    /// NCNN build of the engine.
    Ncnn,
}

impl Backend {
    /// Destination tag namespacing this backend's staging directory.
    pub fn tag(self) -> &'static str {
        match self {
            Backend::Onnx => "onnx",
            Backend::Ncnn => "ncnn",
        }
    }
}
