use serde::{Deserialize, Serialize};
use supplant_core::RequestContext;

/// Policy deciding which administrative requests suppress cart enforcement.
///
/// Historically only synchronous admin requests were skipped, with admin
/// background requests treated like shopper traffic. That remains the
/// default; the other variants cover hosts that want the skip to be total
/// or absent.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminGuard {
    /// Skip enforcement for synchronous admin requests only.
    #[default]
    SkipSynchronousAdmin,

    /// Skip enforcement for every admin request, background included.
    SkipAllAdmin,

    /// Never skip.
    Off,
}

impl AdminGuard {
    /// Should enforcement be suppressed for a request running in `ctx`?
    pub fn suppresses(self, ctx: RequestContext) -> bool {
        match self {
            Self::SkipSynchronousAdmin => ctx.is_admin() && !ctx.is_background(),
            Self::SkipAllAdmin => ctx.is_admin(),
            Self::Off => false,
        }
    }
}
