/// Runtime options for a single resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Skip rule lines without tokenizing them once every slot of the
    /// current stage has been mapped.
    pub short_circuit: bool,
    /// Buffer the input and cross-check the streamed minimum against the
    /// fully materialized reference almanac.
    pub verify: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            short_circuit: true,
            verify: false,
        }
    }
}
