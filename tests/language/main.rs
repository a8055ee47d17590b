//! Integration tests for Layer 1: Language
//!
//! Tests for whole documents, error recovery, printing, and properties
//! that hold for any input.

mod document;
mod printing;
mod properties;
mod recovery;

/// A unit descriptor in the shape real game data files use.
pub const UNIT: &str = r"
// Infantry squad descriptor
export Descriptor_Unit_Rifles is TEntityDescriptor
(
    DescriptorId = GUID:{4ab1f3c0-1c2d-4e5f-8a9b-0c1d2e3f4a5b}
    ClassNameForDebug = 'Unit_Rifles'
    ModulesDescriptors = [
        TTagsModuleDescriptor(TagSet = ['AllUnits', 'Infanterie']),
        ~/InfantryPositionModule,
        TDamageModuleDescriptor
        (
            MaxPhysicalDamages = 10
            SuppressDamagesRegenRatio = [(0, 2.5), (100, 5.0)]
            Scale = $/GFX/Scales.Default * 1.5
        ),
        TVisualModuleDescriptor(Color = RGBA[255, 128, 0, 255] Size = float2[1.0, 2.0])
    ]
)
";
