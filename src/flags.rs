//! Compiler flag syntax
//!
//! Maps logical compiler options to the token syntax of the host's compiler
//! driver. The mapping is resolved once per run into a [`FlagTemplates`] value.

use crate::platform::{CppStandard, HostPlatform};

/// Command-line dialect of the compiler driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagSyntax {
    /// Clang/GCC style (`-I`, `-D`, `-include`)
    Posix,
    /// MSVC compatible style (`/I`, `/D`, `/FI`)
    Msvc,
}

impl FlagSyntax {
    pub fn for_host(host: &HostPlatform) -> Self {
        if host.is_windows() {
            FlagSyntax::Msvc
        } else {
            FlagSyntax::Posix
        }
    }
}

/// A single-argument flag template
///
/// Renders as a leading space, the switch, and the quoted argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagTemplate {
    switch: &'static str,
}

impl FlagTemplate {
    const fn new(switch: &'static str) -> Self {
        Self { switch }
    }

    pub fn switch(&self) -> &'static str {
        self.switch
    }

    /// Render the token for `value`
    pub fn render(&self, value: &str) -> String {
        let mut token = String::with_capacity(self.switch.len() + value.len() + 3);
        self.render_into(&mut token, value);
        token
    }

    /// Append the token for `value` to `out`
    pub fn render_into(&self, out: &mut String, value: &str) {
        out.push(' ');
        out.push_str(self.switch);
        out.push('"');
        out.push_str(value);
        out.push('"');
    }
}

/// Flag templates for one host platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTemplates {
    pub syntax: FlagSyntax,
    pub force_include: FlagTemplate,
    pub user_include: FlagTemplate,
    pub system_include: FlagTemplate,
    pub definition: FlagTemplate,
}

const POSIX_TEMPLATES: FlagTemplates = FlagTemplates {
    syntax: FlagSyntax::Posix,
    force_include: FlagTemplate::new("-include "),
    user_include: FlagTemplate::new("-I"),
    system_include: FlagTemplate::new("-I"),
    definition: FlagTemplate::new("-D"),
};

const MSVC_TEMPLATES: FlagTemplates = FlagTemplates {
    syntax: FlagSyntax::Msvc,
    force_include: FlagTemplate::new("/FI"),
    user_include: FlagTemplate::new("/I"),
    system_include: FlagTemplate::new("/I"),
    definition: FlagTemplate::new("/D"),
};

impl FlagTemplates {
    pub fn for_host(host: &HostPlatform) -> Self {
        match FlagSyntax::for_host(host) {
            FlagSyntax::Posix => POSIX_TEMPLATES,
            FlagSyntax::Msvc => MSVC_TEMPLATES,
        }
    }
}

/// Language standard switch for `host`
///
/// Returns an empty string for standards without a known switch.
pub fn standard_flag(host: &HostPlatform, standard: CppStandard) -> &'static str {
    match (FlagSyntax::for_host(host), standard) {
        (FlagSyntax::Posix, CppStandard::Cpp14) => "-std=c++14",
        (FlagSyntax::Posix, CppStandard::Cpp17 | CppStandard::Default) => "-std=c++17",
        (FlagSyntax::Posix, CppStandard::Latest) => "-std=c++20",
        (FlagSyntax::Msvc, CppStandard::Cpp14) => "/std:c++14",
        (FlagSyntax::Msvc, CppStandard::Cpp17 | CppStandard::Default) => "/std:c++17",
        (FlagSyntax::Msvc, CppStandard::Latest) => "/std:c++latest",
        (_, CppStandard::Unknown) => "",
    }
}

/// Host specific dialect switches appended after the standard flag
pub fn extra_flags(host: &HostPlatform) -> &'static str {
    match host {
        HostPlatform::Mac => "-x objective-c++ -stdlib=libc++",
        _ => "",
    }
}
