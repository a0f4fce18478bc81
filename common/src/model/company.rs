/// Company details shown in the header and footer of every page.
#[derive(Debug, Clone, Copy)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub founder: &'static str,
}

pub const ARDUR: CompanyProfile = CompanyProfile {
    name: "Ardur Technology LLC",
    email: "info@ardurtechnology.com",
    phone: "+1 (702) 809 2713",
    address: "Las Vegas, Nevada, USA",
    founder: "Satish Sable",
};
