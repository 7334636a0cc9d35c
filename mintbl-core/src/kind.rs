//! Known output kinds and their generator invocations.

use std::fmt;

use serde::Serialize;

use crate::{GeneratorInvocation, Mode};

/// A target architecture with its own intrinsics header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IntrinsicArch {
    AArch64,
    Amdgpu,
    Arm,
    Bpf,
    DirectX,
    Hexagon,
    LoongArch,
    Mips,
    Nvptx,
    PowerPc,
    R600,
    RiscV,
    S390,
    Spirv,
    WebAssembly,
    X86,
    XCore,
    Ve,
}

impl IntrinsicArch {
    pub const ALL: [IntrinsicArch; 18] = [
        IntrinsicArch::AArch64,
        IntrinsicArch::Amdgpu,
        IntrinsicArch::Arm,
        IntrinsicArch::Bpf,
        IntrinsicArch::DirectX,
        IntrinsicArch::Hexagon,
        IntrinsicArch::LoongArch,
        IntrinsicArch::Mips,
        IntrinsicArch::Nvptx,
        IntrinsicArch::PowerPc,
        IntrinsicArch::R600,
        IntrinsicArch::RiscV,
        IntrinsicArch::S390,
        IntrinsicArch::Spirv,
        IntrinsicArch::WebAssembly,
        IntrinsicArch::X86,
        IntrinsicArch::XCore,
        IntrinsicArch::Ve,
    ];

    /// The header file this architecture's intrinsic enums are written to.
    pub fn header(&self) -> &'static str {
        match self {
            IntrinsicArch::AArch64 => "IntrinsicsAArch64.h",
            IntrinsicArch::Amdgpu => "IntrinsicsAMDGPU.h",
            IntrinsicArch::Arm => "IntrinsicsARM.h",
            IntrinsicArch::Bpf => "IntrinsicsBPF.h",
            IntrinsicArch::DirectX => "IntrinsicsDirectX.h",
            IntrinsicArch::Hexagon => "IntrinsicsHexagon.h",
            IntrinsicArch::LoongArch => "IntrinsicsLoongArch.h",
            IntrinsicArch::Mips => "IntrinsicsMips.h",
            IntrinsicArch::Nvptx => "IntrinsicsNVPTX.h",
            IntrinsicArch::PowerPc => "IntrinsicsPowerPC.h",
            IntrinsicArch::R600 => "IntrinsicsR600.h",
            IntrinsicArch::RiscV => "IntrinsicsRISCV.h",
            IntrinsicArch::S390 => "IntrinsicsS390.h",
            IntrinsicArch::Spirv => "IntrinsicsSPIRV.h",
            IntrinsicArch::WebAssembly => "IntrinsicsWebAssembly.h",
            IntrinsicArch::X86 => "IntrinsicsX86.h",
            IntrinsicArch::XCore => "IntrinsicsXCore.h",
            IntrinsicArch::Ve => "IntrinsicsVE.h",
        }
    }

    /// The intrinsic name prefix the generator filters on.
    ///
    /// This is the target's short name as used in intrinsic names
    /// (`llvm.<prefix>.*`), which does not always match the header name.
    pub fn prefix(&self) -> &'static str {
        match self {
            IntrinsicArch::AArch64 => "aarch64",
            IntrinsicArch::Amdgpu => "amdgcn",
            IntrinsicArch::Arm => "arm",
            IntrinsicArch::Bpf => "bpf",
            IntrinsicArch::DirectX => "dx",
            IntrinsicArch::Hexagon => "hexagon",
            IntrinsicArch::LoongArch => "loongarch",
            IntrinsicArch::Mips => "mips",
            IntrinsicArch::Nvptx => "nvvm",
            IntrinsicArch::PowerPc => "ppc",
            IntrinsicArch::R600 => "r600",
            IntrinsicArch::RiscV => "riscv",
            IntrinsicArch::S390 => "s390",
            IntrinsicArch::Spirv => "spv",
            IntrinsicArch::WebAssembly => "wasm",
            IntrinsicArch::X86 => "x86",
            IntrinsicArch::XCore => "xcore",
            IntrinsicArch::Ve => "ve",
        }
    }
}

/// A directive language with generated declaration/implementation files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DirectiveDialect {
    /// OpenACC
    Acc,
    /// OpenMP
    Omp,
}

impl DirectiveDialect {
    pub const ALL: [DirectiveDialect; 2] = [DirectiveDialect::Acc, DirectiveDialect::Omp];

    fn stem(&self) -> &'static str {
        match self {
            DirectiveDialect::Acc => "ACC",
            DirectiveDialect::Omp => "OMP",
        }
    }
}

/// Every kind of output the generator is known to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputKind {
    Attributes,
    AttributesCompatFunc,
    IntrinsicEnums,
    IntrinsicImpl,
    ArchIntrinsics(IntrinsicArch),
    DirectiveDecl(DirectiveDialect),
    DirectiveImpl(DirectiveDialect),
    ValueTypes,
    /// Matched by suffix: `<anything>RISCVTargetParserDef.inc`.
    RiscvTargetParserDef,
}

impl OutputKind {
    /// The exact file name of this kind, or `None` for suffix-matched kinds.
    pub fn file_name(&self) -> Option<&'static str> {
        let name = match self {
            OutputKind::Attributes => "Attributes.inc",
            OutputKind::AttributesCompatFunc => "AttributesCompatFunc.inc",
            OutputKind::IntrinsicEnums => "IntrinsicEnums.inc",
            OutputKind::IntrinsicImpl => "IntrinsicImpl.inc",
            OutputKind::ArchIntrinsics(arch) => arch.header(),
            OutputKind::DirectiveDecl(DirectiveDialect::Acc) => "ACC.h.inc",
            OutputKind::DirectiveDecl(DirectiveDialect::Omp) => "OMP.h.inc",
            OutputKind::DirectiveImpl(DirectiveDialect::Acc) => "ACC.inc",
            OutputKind::DirectiveImpl(DirectiveDialect::Omp) => "OMP.inc",
            OutputKind::ValueTypes => "GenVT.inc",
            OutputKind::RiscvTargetParserDef => return None,
        };
        Some(name)
    }

    /// The mode that produces this kind.
    pub fn mode(&self) -> Mode {
        match self {
            OutputKind::Attributes | OutputKind::AttributesCompatFunc => Mode::Attrs,
            OutputKind::IntrinsicEnums | OutputKind::ArchIntrinsics(_) => Mode::IntrinsicEnums,
            OutputKind::IntrinsicImpl => Mode::IntrinsicImpl,
            OutputKind::DirectiveDecl(_) => Mode::DirectiveDecl,
            OutputKind::DirectiveImpl(_) => Mode::DirectiveImpl,
            OutputKind::ValueTypes => Mode::ValueTypes,
            OutputKind::RiscvTargetParserDef => Mode::RiscvTargetDef,
        }
    }

    /// The full generator invocation for this kind.
    pub fn invocation(&self) -> GeneratorInvocation {
        let invocation = GeneratorInvocation::new(self.mode());
        match self {
            OutputKind::ArchIntrinsics(arch) => {
                invocation.with_flag(format!("-intrinsic-prefix={}", arch.prefix()))
            }
            _ => invocation,
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_name() {
            Some(name) => f.write_str(name),
            None => f.write_str("*RISCVTargetParserDef.inc"),
        }
    }
}

impl fmt::Display for DirectiveDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}
