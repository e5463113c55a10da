//! View models and panel state

mod lookup;
mod panel;
mod search;

pub use lookup::{
    Diagnostic, GeoEntry, LookupStatus, LookupViewModel, MailExchanger, Nameserver, SingleIp,
    NOT_AVAILABLE,
};
pub use panel::{LaneTicket, PanelState, PanelTab, Visibility};
pub use search::{
    RecordDetail, SearchCategory, SearchGroup, SearchRecord, SearchStatus, SearchViewModel,
    StatusTone,
};

// Re-export toolbox types the view models are built from
pub use hostlens_toolbox::{Target, TargetKind};
