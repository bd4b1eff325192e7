//! Gateway responses captured from an Eagle-200.

// language=xml
pub const DEVICE_LIST: &str = r"
<DeviceList>
  <Device>
    <HardwareAddress>0x0013500100d8eb85</HardwareAddress>
    <Manufacturer>Generic</Manufacturer>
    <ModelId>electric_meter</ModelId>
    <Protocol>Zigbee</Protocol>
    <LastContact>0x5d6e1b6c</LastContact>
    <ConnectionStatus>Connected</ConnectionStatus>
    <NetworkAddress>0x0000</NetworkAddress>
  </Device>
</DeviceList>
";

// language=xml
pub const TWO_DEVICES: &str = r"
<DeviceList>
  <Device><HardwareAddress>0x0013500100d8eb85</HardwareAddress></Device>
  <Device><HardwareAddress>0x0013500100d8eb86</HardwareAddress></Device>
</DeviceList>
";

pub const NO_DEVICES: &str = "<DeviceList></DeviceList>";

pub fn device_query(demand: &str, delivered: &str, received: &str) -> String {
    // language=xml
    format!(
        r"
<Device>
  <DeviceDetails>
    <Name>Power Meter</Name>
    <HardwareAddress>0x0013500100d8eb85</HardwareAddress>
    <Protocol>Zigbee</Protocol>
    <ConnectionStatus>Connected</ConnectionStatus>
  </DeviceDetails>
  <Components>
    <Component>
      <HardwareId>all</HardwareId>
      <FixedId>0</FixedId>
      <Name>Main</Name>
      <Variables>
        <Variable>
          <Name>zigbee:InstantaneousDemand</Name>
          <Value>{demand}</Value>
          <Units>kW</Units>
          <Description>Instantaneous Demand</Description>
        </Variable>
        <Variable>
          <Name>zigbee:CurrentSummationDelivered</Name>
          <Value>{delivered}</Value>
          <Units>kWh</Units>
          <Description>Total Meter Reading (Delivered)</Description>
        </Variable>
        <Variable>
          <Name>zigbee:CurrentSummationReceived</Name>
          <Value>{received}</Value>
          <Units>kWh</Units>
          <Description>Total Meter Reading (Received)</Description>
        </Variable>
        <Variable>
          <Name>zigbee:Message</Name>
          <Value></Value>
        </Variable>
      </Variables>
    </Component>
  </Components>
</Device>
"
    )
}
