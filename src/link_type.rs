//! The `linktype` tag carried in every PCAP file header, identifying how the
//! payload bytes should be dissected.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid link type: {0}")]
pub struct InvalidLinkType(pub u32);

macro_rules! link_type {
    (
        $(
            $(#[$meta:meta])*
            $name:ident = $value:literal
        ),* $(,)?
    ) => {
        /// A known PCAP `linktype` value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u32)]
        pub enum LinkType {
            $(
                $(#[$meta])*
                $name = $value,
            )*
        }

        impl TryFrom<u32> for LinkType {
            type Error = InvalidLinkType;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $(
                        $value => Ok(LinkType::$name),
                    )*
                    other => Err(InvalidLinkType(other)),
                }
            }
        }

        impl From<LinkType> for u32 {
            fn from(value: LinkType) -> u32 {
                value as u32
            }
        }
    };
}

link_type! {
    Null = 0,
    Ethernet = 1,
    Ax25 = 3,
    Ieee802_5 = 6,
    ArcnetBsd = 7,
    Slip = 8,
    Ppp = 9,
    Fddi = 10,
    AtmRfc1483 = 100,
    Raw = 101,
    PppHdlc = 50,
    PppEther = 51,
    CHdlc = 104,
    Ieee802_11 = 105,
    Frelay = 107,
    Loop = 108,
    LinuxSll = 113,
    Ltalk = 114,
    Ieee802_11Prism = 119,
    IpOverFc = 122,
    Sunatm = 123,
    Pflog = 117,
    ArcnetLinux = 129,
    Mtp2WithPhdr = 139,
    Mtp2 = 140,
    Mtp3 = 141,
    Sccp = 142,
    Docsis = 143,
    LinuxIrda = 144,

    /// DLT_USER0. Non-standard, reserved for applications to define their
    /// own framing. The Full writer (spec §4.5) emits this as its output
    /// link type since it carries a bespoke diff frame.
    User0 = 147,
    User1 = 148,
    User2 = 149,
    User3 = 150,
    User4 = 151,
    User5 = 152,
    User6 = 153,
    User7 = 154,
    User8 = 155,
    User9 = 156,
    User10 = 157,
    User11 = 158,
    User12 = 159,
    User13 = 160,
    User14 = 161,
    User15 = 162,

    Ieee802_11Radiotap = 127,
    Ppi = 192,
    LinuxLapd = 177,
    PppWithDir = 204,
    CHdlcWithDir = 205,
    FrelayWithDir = 206,
    LapbWithDir = 207,
    Ieee802_11Avs = 163,
    BluetoothHciH4 = 187,
    UsbLinux = 189,
    Sita = 196,
    Erf = 197,
    Ieee802_15_4Withfcs = 195,
    Ax25Kiss = 202,
    Lapd = 203,
    BluetoothHciH4WithPhdr = 201,
    PppPppd = 166,
    GprsLlc = 169,
    GpfT = 170,
    GpfF = 171,
    IpmbLinux = 209,
    UsbLinuxMmapped = 220,
    Fc2 = 224,
    Fc2WithFrameDelims = 225,
    Ipv4 = 228,
    Ipv6 = 229,
    Ieee802_15_4Nofcs = 230,
    Dbus = 231,
    Ipnet = 226,
    CanSocketcan = 227,
    DvbCi = 235,
    Mux27010 = 236,
    Stanag5066DPdu = 237,
    Nflog = 239,
    Netanalyzer = 240,
    NetanalyzerTransparent = 241,
    Ipoib = 242,
    Mpeg2Ts = 243,
    Ng40 = 244,
    NfcLlcp = 245,
    Infiniband = 247,
    Sctp = 248,
    UsbPcap = 249,
    RtacSerial = 250,
    BluetoothLeLl = 251,
    Netlink = 253,
    BluetoothLinuxMonitor = 254,
    BluetoothBredrBb = 255,
    BluetoothLeLlWithPhdr = 256,
    ProfibusDl = 257,
    Pktap = 258,
    Epon = 259,
    IpmiHpm2 = 260,
    ZwaveR1R2 = 261,
    ZwaveR3 = 262,
    WattstopperDlm = 263,
    Iso14443 = 264,
    Rds = 265,
    UsbDarwin = 266,
    Sdlc = 268,
    Loratap = 270,
    Vsock = 271,
    NordicBle = 272,
    Docsis31Xra31 = 273,
    EthernetMpacket = 274,
    DisplayportAux = 275,
    LinuxSll2 = 276,
    Openvizsla = 278,
    Ebhscr = 279,
    VppDispatch = 280,
    DsaTagBrcm = 281,
    DsaTagBrcmPrepend = 282,
    Ieee802_15_4Tap = 283,
    DsaTagDsa = 284,
    DsaTagEdsa = 285,
    Elee = 286,
    ZWaveSerial = 287,
    Usb2_0 = 288,
    AtscAlp = 289,
    BacnetMsTp = 165,
    AppleIpOverIeee1394 = 138,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_value() {
        assert_eq!(LinkType::try_from(1u32).unwrap(), LinkType::Ethernet);
        assert_eq!(u32::from(LinkType::Ethernet), 1);
    }

    #[test]
    fn full_writer_link_type_is_user0() {
        assert_eq!(u32::from(LinkType::User0), 147);
    }

    #[test]
    fn rejects_unknown_value() {
        assert!(LinkType::try_from(0xFFFF_FFFFu32).is_err());
    }
}
