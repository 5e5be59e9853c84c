//! End-to-end parses of small, hand-written SDMX-ML 2.1 documents covering
//! each message kind this reader produces.

use std::io::Cursor;

use sdmx_model::{Artefact, DataStructureDefinition, MessageKind, ObservationDimension};
use sdmx_reader::{read_message, ReaderError, ReaderOptions};

fn parse(xml: &str, dsd: Option<DataStructureDefinition>) -> sdmx_reader::Result<sdmx_model::Message> {
    read_message(Cursor::new(xml.as_bytes()), dsd, ReaderOptions::new())
}

#[test]
fn generic_data_message_assembles_header_and_series() {
    let xml = r#"
        <mes:GenericData xmlns:mes="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message"
                          xmlns:gen="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/data/generic">
          <mes:Header>
            <mes:ID>IDREF1</mes:ID>
            <mes:Test>false</mes:Test>
            <mes:Prepared>2024-01-01T00:00:00</mes:Prepared>
            <mes:Sender id="SENDER"/>
            <mes:Receiver id="RECEIVER"/>
            <mes:Structure>
              <mes:DimensionAtObservation>TIME_PERIOD</mes:DimensionAtObservation>
            </mes:Structure>
          </mes:Header>
          <mes:DataSet structureRef="DSD_TEST">
            <gen:Series>
              <gen:SeriesKey>
                <gen:Value id="FREQ" value="A"/>
                <gen:Value id="REF_AREA" value="UK"/>
              </gen:SeriesKey>
              <gen:Attributes>
                <gen:Value id="UNIT_MULT" value="0"/>
              </gen:Attributes>
              <gen:Obs>
                <gen:ObsDimension value="2020"/>
                <gen:ObsValue value="1.23"/>
              </gen:Obs>
            </gen:Series>
          </mes:DataSet>
        </mes:GenericData>
    "#;

    let message = parse(xml, None).expect("message parses");

    assert_eq!(message.header.id.as_deref(), Some("IDREF1"));
    assert!(!message.header.test);
    assert_eq!(message.header.prepared.as_deref(), Some("2024-01-01T00:00:00"));
    assert_eq!(message.header.sender.as_ref().map(|s| s.id.as_str()), Some("SENDER"));
    assert_eq!(message.header.receiver.as_ref().map(|r| r.id.as_str()), Some("RECEIVER"));
    assert_eq!(
        message.header.structure,
        Some(ObservationDimension::Dimension("TIME_PERIOD".to_string()))
    );

    let MessageKind::GenericData(datasets) = message.kind else {
        panic!("expected GenericData");
    };
    assert_eq!(datasets.len(), 1);
    let dataset = &datasets[0];
    assert_eq!(dataset.described_by.as_deref(), Some("DSD_TEST"));
    assert_eq!(dataset.series.len(), 1);

    let series = &dataset.series[0];
    assert_eq!(series.key.get("FREQ"), Some("A"));
    assert_eq!(series.key.get("REF_AREA"), Some("UK"));
    assert_eq!(series.attributes.len(), 1);
    assert_eq!(series.attributes[0].component_id, "UNIT_MULT");
    assert_eq!(series.attributes[0].value, "0");

    assert_eq!(series.observations.len(), 1);
    let obs = &series.observations[0];
    assert_eq!(obs.key.get("TIME_PERIOD"), Some("2020"));
    assert_eq!(obs.value.as_deref(), Some("1.23"));
}

/// A header naming its dataflow via `com:StructureUsage` rather than a
/// direct `com:Structure` DSD reference, and no caller-supplied DSD: the
/// reader must synthesize one from the dataflow's own identifier rather
/// than leaving the `StructureUsage` reference uncollected.
#[test]
fn generic_data_message_with_structure_usage_synthesizes_dsd() {
    let xml = r#"
        <mes:GenericData xmlns:mes="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message"
                          xmlns:com="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/common"
                          xmlns:gen="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/data/generic">
          <mes:Header>
            <mes:ID>IDREF2</mes:ID>
            <mes:Test>false</mes:Test>
            <mes:Structure>
              <com:StructureUsage>
                <com:Ref id="DF_TEST" agencyID="SDMX" class="Dataflow"/>
              </com:StructureUsage>
              <mes:DimensionAtObservation>TIME_PERIOD</mes:DimensionAtObservation>
            </mes:Structure>
          </mes:Header>
          <mes:DataSet>
            <gen:Series>
              <gen:SeriesKey>
                <gen:Value id="FREQ" value="A"/>
              </gen:SeriesKey>
              <gen:Obs>
                <gen:ObsDimension value="2021"/>
                <gen:ObsValue value="4.56"/>
              </gen:Obs>
            </gen:Series>
          </mes:DataSet>
        </mes:GenericData>
    "#;

    let message = parse(xml, None).expect("message parses");

    assert_eq!(
        message.header.structure,
        Some(ObservationDimension::Dimension("TIME_PERIOD".to_string()))
    );

    let MessageKind::GenericData(datasets) = message.kind else {
        panic!("expected GenericData");
    };
    let series = &datasets[0].series[0];
    assert_eq!(series.key.get("FREQ"), Some("A"));
    let obs = &series.observations[0];
    assert_eq!(obs.key.get("TIME_PERIOD"), Some("2021"));
    assert_eq!(obs.value.as_deref(), Some("4.56"));
}

fn sample_dsd() -> DataStructureDefinition {
    use sdmx_model::{Component, ComponentCore};

    let mut dsd = DataStructureDefinition::new("DSD_SS");
    dsd.dimensions.push(Component::Dimension {
        core: ComponentCore::new("FREQ"),
        order: Some(1),
    });
    dsd.dimensions.push(Component::Dimension {
        core: ComponentCore::new("REF_AREA"),
        order: Some(2),
    });
    dsd.dimensions.push(Component::TimeDimension {
        core: ComponentCore::new("TIME_PERIOD"),
        order: Some(3),
    });
    dsd.measures.push(Component::PrimaryMeasure { core: ComponentCore::new("OBS_VALUE") });
    dsd
}

#[test]
fn structure_specific_message_with_supplied_dsd_partitions_attributes() {
    let xml = r#"
        <mes:StructureSpecificData xmlns:mes="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message"
                                    xmlns:data="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/data/structurespecific">
          <mes:Header>
            <mes:ID>MSG2</mes:ID>
            <mes:Test>true</mes:Test>
            <mes:Structure>
              <mes:DimensionAtObservation>TIME_PERIOD</mes:DimensionAtObservation>
            </mes:Structure>
          </mes:Header>
          <mes:DataSet structureRef="DSD_SS">
            <data:Series FREQ="A" REF_AREA="UK">
              <data:Obs TIME_PERIOD="2020" OBS_VALUE="1.5" CONF_STATUS="F"/>
              <data:Obs TIME_PERIOD="2021" OBS_VALUE="2.5"/>
            </data:Series>
          </mes:DataSet>
        </mes:StructureSpecificData>
    "#;

    let message = parse(xml, Some(sample_dsd())).expect("message parses");

    assert_eq!(
        message.header.structure,
        Some(ObservationDimension::Dimension("TIME_PERIOD".to_string()))
    );

    let MessageKind::StructureSpecificData(datasets) = message.kind else {
        panic!("expected StructureSpecificData");
    };
    let dataset = &datasets[0];
    assert_eq!(dataset.series.len(), 1);
    let series = &dataset.series[0];
    assert_eq!(series.key.get("FREQ"), Some("A"));
    assert_eq!(series.key.get("REF_AREA"), Some("UK"));
    assert_eq!(series.observations.len(), 2);

    let first = &series.observations[0];
    assert_eq!(first.key.get("TIME_PERIOD"), Some("2020"));
    assert_eq!(first.value.as_deref(), Some("1.5"));
    assert_eq!(first.attributes.len(), 1);
    assert_eq!(first.attributes[0].component_id, "CONF_STATUS");

    let second = &series.observations[1];
    assert_eq!(second.key.get("TIME_PERIOD"), Some("2021"));
    assert_eq!(second.value.as_deref(), Some("2.5"));
    assert!(second.attributes.is_empty());
}

#[test]
fn structure_message_assembles_codelist_and_data_structure() {
    let xml = r#"
        <mes:Structure xmlns:mes="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message"
                       xmlns:str="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/structure"
                       xmlns:com="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/common">
          <mes:Header>
            <mes:ID>STRUCT1</mes:ID>
            <mes:Test>false</mes:Test>
          </mes:Header>
          <mes:Structures>
            <str:Codelists>
              <str:Codelist id="CL_FREQ" agencyID="SDMX" version="1.0">
                <com:Name>Frequency</com:Name>
                <str:Code id="A">
                  <com:Name>Annual</com:Name>
                </str:Code>
              </str:Codelist>
            </str:Codelists>
            <str:DataStructures>
              <str:DataStructure id="DSD_TEST" agencyID="SDMX" version="1.0">
                <com:Name>Test DSD</com:Name>
                <str:DataStructureComponents>
                  <str:DimensionList id="DimensionDescriptor">
                    <str:Dimension id="FREQ" position="1">
                      <str:ConceptIdentity>
                        <com:Ref id="FREQ" agencyID="SDMX" package="conceptscheme" class="Concept"/>
                      </str:ConceptIdentity>
                      <str:LocalRepresentation>
                        <str:Enumeration>
                          <com:Ref id="CL_FREQ" agencyID="SDMX" class="Codelist"/>
                        </str:Enumeration>
                      </str:LocalRepresentation>
                    </str:Dimension>
                    <str:TimeDimension id="TIME_PERIOD" position="2">
                      <str:ConceptIdentity>
                        <com:Ref id="TIME_PERIOD" agencyID="SDMX" package="conceptscheme" class="Concept"/>
                      </str:ConceptIdentity>
                    </str:TimeDimension>
                  </str:DimensionList>
                  <str:MeasureList id="MeasureDescriptor">
                    <str:PrimaryMeasure id="OBS_VALUE">
                      <str:ConceptIdentity>
                        <com:Ref id="OBS_VALUE" agencyID="SDMX" package="conceptscheme" class="Concept"/>
                      </str:ConceptIdentity>
                    </str:PrimaryMeasure>
                  </str:MeasureList>
                </str:DataStructureComponents>
              </str:DataStructure>
            </str:DataStructures>
          </mes:Structures>
        </mes:Structure>
    "#;

    let message = parse(xml, None).expect("message parses");

    let MessageKind::Structure(structures) = message.kind else {
        panic!("expected Structure");
    };

    let codelist = structures
        .artefacts
        .iter()
        .find_map(|a| match a {
            Artefact::Codelist(c) if c.id == "CL_FREQ" => Some(c),
            _ => None,
        })
        .expect("codelist present");
    assert_eq!(codelist.name.default_label(), Some("Frequency"));
    let code = codelist.find("A").expect("code A present");
    assert_eq!(code.name.default_label(), Some("Annual"));

    let dsd = structures.data_structures().find(|d| d.id == "DSD_TEST").expect("dsd present");
    assert_eq!(dsd.name.default_label(), Some("Test DSD"));
    assert_eq!(dsd.dimensions.components.len(), 2);

    let freq = dsd.dimensions.find("FREQ").expect("FREQ dimension");
    assert_eq!(freq.order(), Some(1));
    assert_eq!(freq.core().concept_identity.as_deref(), Some("FREQ"));
    assert_eq!(
        freq.core().local_representation.as_ref().and_then(|r| r.enumeration.as_deref()),
        Some("CL_FREQ")
    );

    let time_dimension = dsd.dimensions.find("TIME_PERIOD").expect("TIME_PERIOD dimension");
    assert_eq!(time_dimension.order(), Some(2));

    assert_eq!(dsd.measures.components.len(), 1);
    assert_eq!(dsd.measures.components[0].id(), "OBS_VALUE");
}

#[test]
fn error_message_carries_footer_text() {
    let xml = r#"
        <mes:Error xmlns:mes="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message"
                   xmlns:footer="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message/footer"
                   xmlns:com="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/common">
          <mes:Header>
            <mes:ID>ERR1</mes:ID>
            <mes:Test>false</mes:Test>
          </mes:Header>
          <footer:Footer>
            <footer:Message severity="Error" code="100">
              <com:Text>Something broke</com:Text>
            </footer:Message>
          </footer:Footer>
        </mes:Error>
    "#;

    let message = parse(xml, None).expect("message parses");
    assert!(matches!(message.kind, MessageKind::Error));

    let footer = message.footer.expect("footer present");
    assert_eq!(footer.severity, sdmx_model::Severity::Error);
    assert_eq!(footer.code, Some(100));
    assert_eq!(footer.text.len(), 1);
    assert_eq!(footer.text[0].default_label(), Some("Something broke"));
}

#[test]
fn unknown_element_is_reported() {
    let xml = r#"
        <mes:GenericData xmlns:mes="http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message">
          <mes:Bogus/>
        </mes:GenericData>
    "#;

    let err = parse(xml, None).expect_err("unknown element must fail");
    assert!(matches!(err, ReaderError::UnknownElement(_, _)));
}
