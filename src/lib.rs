pub mod configuration;

pub mod function {
    pub mod function;
    pub mod functionerror;
    pub mod functionpoint;
    pub mod integration;
    pub mod scalarfunction;
}

pub mod io {
    pub mod binarycodec;
    pub mod textcodec;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod reflection {
    pub mod typedescriptor;
    pub mod typeregistry;
}

pub mod tabulated {
    pub mod tabulatedfunction;
    pub mod pointiter;
    pub mod arraytabulatedfunction;
    pub mod linkedlisttabulatedfunction;
    pub mod tabulatedfunctionfactory;
    pub mod tabulatedfunctionfactorymanager;
    pub mod tabulatedfunctions;
}
