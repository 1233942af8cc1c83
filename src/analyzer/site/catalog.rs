use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    RealEstate,
    Plumbing,
    Electrical,
    Roofing,
    Hvac,
    Cleaning,
    Landscaping,
    Painting,
    Auto,
    Dental,
    Legal,
    Wraps,
    Remodeling,
    Moving,
    Pest,
    Insurance,
    General,
}

impl Serialize for Industry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl Industry {
    pub fn tag(self) -> &'static str {
        match self {
            Industry::RealEstate => "real_estate",
            Industry::Plumbing => "plumbing",
            Industry::Electrical => "electrical",
            Industry::Roofing => "roofing",
            Industry::Hvac => "hvac",
            Industry::Cleaning => "cleaning",
            Industry::Landscaping => "landscaping",
            Industry::Painting => "painting",
            Industry::Auto => "auto",
            Industry::Dental => "dental",
            Industry::Legal => "legal",
            Industry::Wraps => "wraps",
            Industry::Remodeling => "remodeling",
            Industry::Moving => "moving",
            Industry::Pest => "pest",
            Industry::Insurance => "insurance",
            Industry::General => "general",
        }
    }
}

/// Checked top to bottom; the first industry with any keyword hit wins, so
/// table order decides where a description touching several trades lands.
pub const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::RealEstate,
        &["real estate", "realty", "realtor", "property", "homes for sale", "mls", "broker"],
    ),
    (Industry::Plumbing, &["plumb", "drain", "pipe", "water heater", "sewer"]),
    (Industry::Electrical, &["electric", "wiring", "panel", "circuit", "outlet"]),
    (Industry::Roofing, &["roof", "shingle", "gutter", "storm damage"]),
    (
        Industry::Hvac,
        &["hvac", "heating", "cooling", "air condition", "furnace", "ac repair"],
    ),
    (Industry::Cleaning, &["clean", "maid", "janitorial", "pressure wash"]),
    (
        Industry::Landscaping,
        &["landscap", "lawn", "garden", "tree", "mow", "irrigation"],
    ),
    (Industry::Painting, &["paint", "stain", "finish", "coating"]),
    (
        Industry::Auto,
        &["auto", "car", "vehicle", "mechanic", "repair shop", "tire", "brake"],
    ),
    (Industry::Dental, &["dental", "dentist", "teeth", "orthodont", "oral"]),
    (Industry::Legal, &["law", "attorney", "legal", "lawyer", "counsel"]),
    (Industry::Wraps, &["wrap", "vinyl", "graphic", "signage", "print"]),
    (
        Industry::Remodeling,
        &["remodel", "renovation", "kitchen", "bathroom", "basement", "contractor"],
    ),
    (Industry::Moving, &["moving", "movers", "relocation", "hauling"]),
    (Industry::Pest, &["pest", "exterminator", "termite", "bug"]),
    (Industry::Insurance, &["insurance", "coverage", "policy", "claim"]),
];

pub type ServiceTemplate = (&'static str, &'static str);

const REAL_ESTATE_SERVICES: &[ServiceTemplate] = &[
    ("Residential Sales", "Expert guidance buying or selling your home. We know the local market inside and out."),
    ("Property Management", "Full-service property management that maximizes your investment returns."),
    ("Commercial Real Estate", "Commercial property sales, leasing, and investment opportunities."),
    ("Investment Properties", "Find and analyze investment properties with strong ROI potential."),
    ("First-Time Buyers", "Dedicated support for first-time homebuyers navigating the process."),
    ("Market Analysis", "Comprehensive market analysis to price your property competitively."),
];

const PLUMBING_SERVICES: &[ServiceTemplate] = &[
    ("Emergency Plumbing", "24/7 emergency plumbing service when you need it most."),
    ("Drain Cleaning", "Professional drain cleaning to restore full flow to your pipes."),
    ("Water Heater Repair", "Expert water heater repair and installation for reliable hot water."),
    ("Pipe Installation", "Quality pipe installation and repair for your home or business."),
    ("Bathroom Plumbing", "Complete bathroom plumbing services from faucets to full renovations."),
    ("Kitchen Plumbing", "Kitchen plumbing solutions including garbage disposals and dishwashers."),
];

const ELECTRICAL_SERVICES: &[ServiceTemplate] = &[
    ("Residential Electrical", "Complete electrical services for your home's safety and comfort."),
    ("Panel Upgrades", "Electrical panel upgrades to handle modern power demands."),
    ("Lighting Installation", "Interior and exterior lighting design and installation."),
    ("Emergency Repairs", "24/7 emergency electrical repair when you need it fast."),
    ("Code Compliance", "Electrical inspections and code compliance updates."),
    ("EV Charger Installation", "Home EV charger installation for your electric vehicle."),
];

const ROOFING_SERVICES: &[ServiceTemplate] = &[
    ("Roof Replacement", "Complete roof replacement with premium materials and expert installation."),
    ("Roof Repair", "Fast, reliable roof repairs to protect your home."),
    ("Storm Damage", "Emergency storm damage repair and insurance claim assistance."),
    ("Gutter Installation", "Seamless gutter installation and maintenance."),
    ("Roof Inspection", "Thorough roof inspections with detailed reports."),
    ("Commercial Roofing", "Commercial roofing solutions for businesses of all sizes."),
];

const HVAC_SERVICES: &[ServiceTemplate] = &[
    ("AC Installation", "High-efficiency AC installation to keep you cool and save energy."),
    ("Heating Repair", "Expert heating system repair for all makes and models."),
    ("HVAC Maintenance", "Preventive maintenance plans to extend equipment life."),
    ("Duct Cleaning", "Professional duct cleaning for better air quality."),
    ("Emergency Service", "24/7 emergency HVAC service when comfort can't wait."),
    ("Commercial HVAC", "Commercial HVAC solutions for offices and retail."),
];

const CLEANING_SERVICES: &[ServiceTemplate] = &[
    ("Residential Cleaning", "Thorough home cleaning that gives you your weekends back."),
    ("Commercial Cleaning", "Professional cleaning services for offices and businesses."),
    ("Deep Cleaning", "Intensive deep cleaning for a truly spotless space."),
    ("Move-In/Move-Out", "Move-in and move-out cleaning that gets your deposit back."),
    ("Office Cleaning", "Regular office cleaning to maintain a professional workspace."),
    ("Post-Construction", "Post-construction cleanup to make new spaces shine."),
];

const LANDSCAPING_SERVICES: &[ServiceTemplate] = &[
    ("Landscape Design", "Custom landscape design that transforms your outdoor space."),
    ("Lawn Maintenance", "Regular lawn care that keeps your property looking its best."),
    ("Tree Service", "Professional tree trimming, removal, and stump grinding."),
    ("Hardscaping", "Patios, walkways, retaining walls, and outdoor living spaces."),
    ("Irrigation", "Sprinkler system installation, repair, and maintenance."),
    ("Seasonal Cleanup", "Spring and fall cleanup to keep your property pristine."),
];

const WRAPS_SERVICES: &[ServiceTemplate] = &[
    ("Vehicle Wraps", "Turn your vehicles into mobile billboards with stunning wraps."),
    ("Wall Graphics", "Transform walls into branded experiences with custom graphics."),
    ("Window Graphics", "Professional window graphics for privacy and branding."),
    ("Floor Graphics", "Eye-catching floor graphics for retail and events."),
    ("Trade Show Displays", "Stand out at trade shows with professional displays."),
    ("Custom Signage", "Custom signage solutions for businesses of all sizes."),
];

const REMODELING_SERVICES: &[ServiceTemplate] = &[
    ("Kitchen Remodeling", "Complete kitchen transformations from cabinets to countertops."),
    ("Bathroom Renovation", "Modern bathroom upgrades including tile, vanities, and showers."),
    ("Basement Finishing", "Transform unused space into living areas and entertainment rooms."),
    ("Interior Painting", "Professional painting with premium paints and meticulous prep."),
    ("Flooring Installation", "Hardwood, tile, luxury vinyl, and carpet installation."),
    ("Decks & Outdoor", "Custom decks, patios, pergolas, and outdoor kitchens."),
];

const GENERAL_SERVICES: &[ServiceTemplate] = &[
    ("Consultation", "Professional consultation to understand your needs and goals."),
    ("Project Management", "End-to-end project management for seamless execution."),
    ("Custom Solutions", "Tailored solutions designed specifically for your situation."),
    ("Maintenance Plans", "Ongoing maintenance plans to protect your investment."),
    ("Emergency Service", "Responsive emergency service when you need it most."),
    ("Commercial Services", "Professional services for businesses and commercial properties."),
];

pub fn default_services(industry: Industry) -> &'static [ServiceTemplate] {
    match industry {
        Industry::RealEstate => REAL_ESTATE_SERVICES,
        Industry::Plumbing => PLUMBING_SERVICES,
        Industry::Electrical => ELECTRICAL_SERVICES,
        Industry::Roofing => ROOFING_SERVICES,
        Industry::Hvac => HVAC_SERVICES,
        Industry::Cleaning => CLEANING_SERVICES,
        Industry::Landscaping => LANDSCAPING_SERVICES,
        Industry::Wraps => WRAPS_SERVICES,
        Industry::Remodeling => REMODELING_SERVICES,
        _ => GENERAL_SERVICES,
    }
}

/// Name fragment → icon key, first hit wins.
const ICON_KEYWORDS: &[(&str, &str)] = &[
    ("kitchen", "kitchen"),
    ("bathroom", "bathroom"),
    ("bath", "bathroom"),
    ("basement", "basement"),
    ("paint", "painting"),
    ("floor", "flooring"),
    ("deck", "deck"),
    ("outdoor", "deck"),
    ("patio", "deck"),
    ("roof", "roofing"),
    ("window", "windows"),
    ("door", "doors"),
    ("siding", "siding"),
    ("addition", "addition"),
    ("plumb", "plumbing"),
    ("electric", "electrical"),
    ("wiring", "electrical"),
];

pub const DEFAULT_ICON: &str = "general";

pub fn icon_for(service_name: &str) -> &'static str {
    let lower = service_name.to_lowercase();
    ICON_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
