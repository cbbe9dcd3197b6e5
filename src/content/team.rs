pub struct Person {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub static EXECUTIVES: [Person; 3] = [
    Person {
        name: "Sarah Van Dorn",
        title: "Chief Executive Officer",
        bio: "Fifteen years structuring infrastructure debt across West Africa before founding AgAsset Co.",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=1961&auto=format&fit=crop",
    },
    Person {
        name: "Michael Abara",
        title: "Technical Director",
        bio: "Leads asset selection, IoT integration and the field maintenance network.",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=1887&auto=format&fit=crop",
    },
    Person {
        name: "Elena Rossi",
        title: "Chief Investment Officer",
        bio: "Oversees SPV structuring and investor reporting.",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=1888&auto=format&fit=crop",
    },
];

pub static BOARD: [Person; 5] = [
    Person { name: "Dr. Tunde Ojo", title: "Chairman", bio: "", image: "https://images.unsplash.com/photo-1531384441138-2736e62e0919?q=80&w=1887&auto=format&fit=crop" },
    Person { name: "Claire Thompson", title: "Non-Executive Director", bio: "", image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=2070&auto=format&fit=crop" },
    Person { name: "Jameson Pike", title: "Venture Partner", bio: "", image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=1887&auto=format&fit=crop" },
    Person { name: "Fatima Yusuf", title: "Impact Director", bio: "", image: "https://images.unsplash.com/photo-1589156280159-27698a70f29e?q=80&w=1886&auto=format&fit=crop" },
    Person { name: "Robert Lang", title: "Strategic Advisor", bio: "", image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=1887&auto=format&fit=crop" },
];

pub static MEMBERS: [Person; 8] = [
    Person { name: "Korede Bello", title: "Operations Lead", bio: "", image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=1887&auto=format&fit=crop" },
    Person { name: "Aisha Mohammed", title: "Credit Analyst", bio: "", image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=1888&auto=format&fit=crop" },
    Person { name: "David Chen", title: "IoT Engineer", bio: "", image: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=1887&auto=format&fit=crop" },
    Person { name: "Grace Onu", title: "Field Supervisor", bio: "", image: "https://images.unsplash.com/photo-1598550874175-4d0fe4a2c943?q=80&w=1887&auto=format&fit=crop" },
    Person { name: "Samuel Wright", title: "Asset Manager", bio: "", image: "https://images.unsplash.com/photo-1492562080023-ab3db95bfbce?q=80&w=2048&auto=format&fit=crop" },
    Person { name: "Blessing Okafor", title: "Partnerships", bio: "", image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1964&auto=format&fit=crop" },
    Person { name: "Emanuel Silva", title: "Systems Dev", bio: "", image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=1887&auto=format&fit=crop" },
    Person { name: "Isabella Cruz", title: "Legal Counsel", bio: "", image: "https://images.unsplash.com/photo-1567532939604-b6c5b0ad2e01?q=80&w=1887&auto=format&fit=crop" },
];
