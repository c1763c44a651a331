//! One zero-state dispatcher per packaged (backend × OS × arch) variant.

use crate::{Backend, LibraryLoader};

/// ONNX Runtime build for Linux x86_64.
pub struct OnnxLinuxX8664;

impl LibraryLoader for OnnxLinuxX8664 {
    fn resource(&self) -> &'static str {
        "lib/libRapidOcr-x86_64.so"
    }

    fn backend(&self) -> Backend {
        Backend::Onnx
    }
}

/// ONNX Runtime build for macOS x86_64.
pub struct OnnxMacX8664;

impl LibraryLoader for OnnxMacX8664 {
    fn resource(&self) -> &'static str {
        "lib/libRapidOcr-x86_64.dylib"
    }

    fn backend(&self) -> Backend {
        Backend::Onnx
    }
}

/// ONNX Runtime build for macOS arm64 (Apple Silicon).
pub struct OnnxMacArm64;

impl LibraryLoader for OnnxMacArm64 {
    fn resource(&self) -> &'static str {
        "lib/libRapidOcr-arm64.dylib"
    }

    fn backend(&self) -> Backend {
        Backend::Onnx
    }
}

/// ONNX Runtime build for Windows x86.
pub struct OnnxWindowsX86;

impl LibraryLoader for OnnxWindowsX86 {
    fn resource(&self) -> &'static str {
        "lib/RapidOcr-x86.dll"
    }

    fn backend(&self) -> Backend {
        Backend::Onnx
    }
}

/// ONNX Runtime build for Windows x86_64.
pub struct OnnxWindowsX8664;

impl LibraryLoader for OnnxWindowsX8664 {
    fn resource(&self) -> &'static str {
        "lib/RapidOcr-x86_64.dll"
    }

    fn backend(&self) -> Backend {
        Backend::Onnx
    }
}

/// NCNN build for Linux x86_64.
pub struct NcnnLinuxX8664;

impl LibraryLoader for NcnnLinuxX8664 {
    fn resource(&self) -> &'static str {
        "lib/libRapidOcr-x86_64.so"
    }

    fn backend(&self) -> Backend {
        Backend::Ncnn
    }
}

/// NCNN build for macOS x86_64.
pub struct NcnnMacX8664;

impl LibraryLoader for NcnnMacX8664 {
    fn resource(&self) -> &'static str {
        "lib/libRapidOcr-x86_64.dylib"
    }

    fn backend(&self) -> Backend {
        Backend::Ncnn
    }
}

/// NCNN build for Windows x86_64.
pub struct NcnnWindowsX8664;

impl LibraryLoader for NcnnWindowsX8664 {
    fn resource(&self) -> &'static str {
        "lib/RapidOcr-x86_64.dll"
    }

    fn backend(&self) -> Backend {
        Backend::Ncnn
    }
}
