//! Section registry — header signatures, section ids, and display labels.
//!
//! A sar report never names its sections; each one is recognised by the
//! first two column names of its header line. The signature table is
//! scanned in order and the first matching pair wins, so a new section
//! type must be added before any signature it could be confused with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one kind of sar activity section.
///
/// The declaration order is the order sections appear in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionId {
    CpuUtil,
    TaskCreation,
    Swapping,
    Paging,
    Io,
    MemUtil,
    SwapSpaceUtil,
    HugepagesUtil,
    KernelTables,
    QueueLoad,
    TtyDev,
    BlockDev,
    NetworkDev,
    NetworkErrors,
    NetworkSockets,
    NetworkSoft,
    NfsClient,
    NfsServer,
}

impl SectionId {
    /// All section ids in menu order.
    pub const ALL: [SectionId; 18] = [
        SectionId::CpuUtil,
        SectionId::TaskCreation,
        SectionId::Swapping,
        SectionId::Paging,
        SectionId::Io,
        SectionId::MemUtil,
        SectionId::SwapSpaceUtil,
        SectionId::HugepagesUtil,
        SectionId::KernelTables,
        SectionId::QueueLoad,
        SectionId::TtyDev,
        SectionId::BlockDev,
        SectionId::NetworkDev,
        SectionId::NetworkErrors,
        SectionId::NetworkSockets,
        SectionId::NetworkSoft,
        SectionId::NfsClient,
        SectionId::NfsServer,
    ];

    /// Short label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::CpuUtil => "CPU util",
            SectionId::TaskCreation => "Task Creation & Switch",
            SectionId::Swapping => "Swapping statics",
            SectionId::Paging => "Paging statics",
            SectionId::Io => "IO statics",
            SectionId::MemUtil => "Memory util",
            SectionId::SwapSpaceUtil => "Swap space util",
            SectionId::HugepagesUtil => "Hugepages util",
            SectionId::KernelTables => "inode/file/kernel-tables",
            SectionId::QueueLoad => "Queue-length & load-avg",
            SectionId::TtyDev => "TTY devices activity",
            SectionId::BlockDev => "Block dev activity",
            SectionId::NetworkDev => "Network statistics",
            SectionId::NetworkErrors => "Network device errors",
            SectionId::NetworkSockets => "Network sockets",
            SectionId::NetworkSoft => "Software-based network processing",
            SectionId::NfsClient => "NFS client",
            SectionId::NfsServer => "NFS server",
        }
    }

    /// Long description of the activity, as sar documents it.
    pub fn description(self) -> &'static str {
        match self {
            SectionId::CpuUtil => "CPU utilization",
            SectionId::TaskCreation => "task creation and system switching activity",
            SectionId::Swapping => "swapping statistics",
            SectionId::Paging => "paging statistics",
            SectionId::Io => "I/O and transfer rate statistics",
            SectionId::MemUtil => "memory utilization statistics",
            SectionId::SwapSpaceUtil => "swap space utilization statistics",
            SectionId::HugepagesUtil => "hugepages utilization statistics",
            SectionId::KernelTables => "inode, file and other kernel tables status",
            SectionId::QueueLoad => "queue length and load averages",
            SectionId::TtyDev => "TTY devices activity",
            SectionId::BlockDev => "activity for each block device",
            SectionId::NetworkDev => "network statistics",
            SectionId::NetworkErrors => "statistics on failures (errors) from the network devices",
            SectionId::NetworkSockets => "statistics on sockets in use",
            SectionId::NetworkSoft => "statistics about software-based network processing",
            SectionId::NfsClient => "statistics about NFS client activity",
            SectionId::NfsServer => "statistics about NFS server activity",
        }
    }

    /// Reverse lookup from a menu label.
    pub fn from_label(label: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| id.label() == label)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the signature table: the first two header columns of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub first: &'static str,
    pub second: &'static str,
    pub id: SectionId,
}

const fn sig(first: &'static str, second: &'static str, id: SectionId) -> Signature {
    Signature { first, second, id }
}

/// Ordered signature table. First match wins.
pub const SIGNATURES: &[Signature] = &[
    sig("CPU", "%usr", SectionId::CpuUtil),
    sig("proc/s", "cswch/s", SectionId::TaskCreation),
    sig("pswpin/s", "pswpout/s", SectionId::Swapping),
    sig("pgpgin/s", "pgpgout/s", SectionId::Paging),
    sig("tps", "rtps", SectionId::Io),
    sig("kbmemfree", "kbavail", SectionId::MemUtil),
    sig("kbmemfree", "kbmemused", SectionId::MemUtil),
    sig("kbswpfree", "kbswpused", SectionId::SwapSpaceUtil),
    sig("kbhugfree", "kbhugused", SectionId::HugepagesUtil),
    sig("dentunusd", "file-nr", SectionId::KernelTables),
    sig("runq-sz", "plist-sz", SectionId::QueueLoad),
    sig("TTY", "rcvin/s", SectionId::TtyDev),
    sig("DEV", "tps", SectionId::BlockDev),
    sig("IFACE", "rxpck/s", SectionId::NetworkDev),
    sig("IFACE", "rxerr/s", SectionId::NetworkErrors),
    sig("call/s", "retrans/s", SectionId::NfsClient),
    sig("scall/s", "badcall/s", SectionId::NfsServer),
    sig("totsck", "tcpsck", SectionId::NetworkSockets),
    sig("CPU", "total/s", SectionId::NetworkSoft),
];

/// Identify a section from the first two column names of its header.
pub fn lookup(first: &str, second: &str) -> Option<SectionId> {
    SIGNATURES
        .iter()
        .find(|s| s.first == first && s.second == second)
        .map(|s| s.id)
}
