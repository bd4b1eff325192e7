use std::borrow::Cow;

/// Gateway command.
///
/// The firmware parser is picky, so the bodies reproduce the exact text
/// the gateway is known to accept, whitespace included.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command<'a> {
    /// List the metered devices paired with the gateway.
    DeviceList,

    /// Fetch all components and variables of the device.
    DeviceQuery { hardware_address: &'a str },
}

impl Command<'_> {
    const DEVICE_LIST: &'static str = "\n    <Command>\n      <Name>device_list</Name>\n    </Command>\n";

    const DEVICE_QUERY_HEAD: &'static str = concat!(
        "\n",
        "            <Command>\n",
        "              <Name>device_query</Name>\n",
        "              <DeviceDetails>\n",
        "                <HardwareAddress>",
    );

    const DEVICE_QUERY_TAIL: &'static str = concat!(
        "</HardwareAddress>\n",
        "              </DeviceDetails>\n",
        "              <Components>\n",
        "                <All>Y</All>\n",
        "              </Components>\n",
        "            </Command>\n",
        "        ",
    );

    #[must_use]
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::DeviceList => "device_list",
            Self::DeviceQuery { .. } => "device_query",
        }
    }

    /// Request body. The hardware address is embedded verbatim.
    #[must_use]
    pub fn body(&self) -> Cow<'static, str> {
        match self {
            Self::DeviceList => Cow::Borrowed(Self::DEVICE_LIST),
            Self::DeviceQuery { hardware_address } => Cow::Owned(format!(
                "{}{hardware_address}{}",
                Self::DEVICE_QUERY_HEAD,
                Self::DEVICE_QUERY_TAIL,
            )),
        }
    }
}
