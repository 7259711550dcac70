//! Template registry: one pure render function per file role.
//!
//! Bodies are `&'static str` sources with `{{VARIABLE}}` placeholders. The
//! only variables are the identifier's derived forms:
//!
//! | Variable          | Example        |
//! |-------------------|----------------|
//! | `FEATURE_KEBAB`   | `user-profile` |
//! | `FEATURE_PASCAL`  | `UserProfile`  |
//! | `FEATURE_CAMEL`   | `userProfile`  |
//!
//! Rendering never touches the filesystem and depends on nothing but the
//! identifier, so the same identifier always yields byte-identical output.

use std::fmt;

use serde::Serialize;

use crate::domain::identifier::FeatureIdentifier;

/// Signature shared by every template.
pub type RenderFn = fn(&FeatureIdentifier) -> String;

/// The fixed set of files a feature scaffold consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    Index,
    Service,
    Schema,
    Types,
    Utils,
    Hook,
    Store,
    ActionForm,
    SharedInput,
}

impl FileRole {
    /// Every role, in plan order.
    pub const ALL: [FileRole; 9] = [
        Self::Index,
        Self::Service,
        Self::Schema,
        Self::Types,
        Self::Utils,
        Self::Hook,
        Self::Store,
        Self::ActionForm,
        Self::SharedInput,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Service => "service",
            Self::Schema => "schema",
            Self::Types => "types",
            Self::Utils => "utils",
            Self::Hook => "hook",
            Self::Store => "store",
            Self::ActionForm => "action-form",
            Self::SharedInput => "shared-input",
        }
    }

    /// Whether the file lives outside the feature tree and is shared by all
    /// features.
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::SharedInput)
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup from role to render function.
pub struct TemplateRegistry;

impl TemplateRegistry {
    /// The render function bound to `role`.
    pub fn renderer(role: FileRole) -> RenderFn {
        match role {
            FileRole::Index => render_index,
            FileRole::Service => render_service,
            FileRole::Schema => render_schema,
            FileRole::Types => render_types,
            FileRole::Utils => render_utils,
            FileRole::Hook => render_hook,
            FileRole::Store => render_store,
            FileRole::ActionForm => render_action_form,
            FileRole::SharedInput => render_shared_input,
        }
    }

    /// Render `role` for `identifier`.
    pub fn render(role: FileRole, identifier: &FeatureIdentifier) -> String {
        (Self::renderer(role))(identifier)
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn substitute(source: &str, id: &FeatureIdentifier) -> String {
    source
        .replace("{{FEATURE_KEBAB}}", id.kebab())
        .replace("{{FEATURE_PASCAL}}", id.pascal())
        .replace("{{FEATURE_CAMEL}}", id.camel())
}

pub fn render_index(id: &FeatureIdentifier) -> String {
    substitute(INDEX, id)
}

pub fn render_service(id: &FeatureIdentifier) -> String {
    substitute(SERVICE, id)
}

pub fn render_schema(id: &FeatureIdentifier) -> String {
    substitute(SCHEMA, id)
}

pub fn render_types(id: &FeatureIdentifier) -> String {
    substitute(TYPES, id)
}

pub fn render_utils(id: &FeatureIdentifier) -> String {
    substitute(UTILS, id)
}

pub fn render_hook(id: &FeatureIdentifier) -> String {
    substitute(HOOK, id)
}

pub fn render_store(id: &FeatureIdentifier) -> String {
    substitute(STORE, id)
}

pub fn render_action_form(id: &FeatureIdentifier) -> String {
    substitute(ACTION_FORM, id)
}

/// Identical for every feature.
pub fn render_shared_input(_id: &FeatureIdentifier) -> String {
    SHARED_INPUT.to_owned()
}

// ── Sources ───────────────────────────────────────────────────────────────────

const INDEX: &str = r#"export * from "./services/{{FEATURE_KEBAB}}.service";
export * from "./hooks/use-{{FEATURE_KEBAB}}";
export * from "./schema/{{FEATURE_KEBAB}}.schema";
export * from "./types/{{FEATURE_KEBAB}}.types";
export { ActionForm as {{FEATURE_PASCAL}}ActionForm } from "./forms/action-form";
"#;

const SERVICE: &str = r#"import API from "@/config/api/api";
import http from "@/config/api/http";
import { IQueryParams } from "@/types";
import { {{FEATURE_PASCAL}}, {{FEATURE_PASCAL}}Payload } from "../types/{{FEATURE_KEBAB}}.types";

export const get{{FEATURE_PASCAL}} = (params?: IQueryParams) =>
  http.get<{{FEATURE_PASCAL}}[]>(API.{{FEATURE_CAMEL}}.list, { params });

export const create{{FEATURE_PASCAL}} = (payload: {{FEATURE_PASCAL}}Payload) =>
  http.post<{{FEATURE_PASCAL}}>(API.{{FEATURE_CAMEL}}.create, payload);

export const update{{FEATURE_PASCAL}} = (id: string, payload: {{FEATURE_PASCAL}}Payload) =>
  http.put<{{FEATURE_PASCAL}}>(`${API.{{FEATURE_CAMEL}}.update}/${id}`, payload);

export const delete{{FEATURE_PASCAL}} = (id: string) =>
  http.delete<void>(`${API.{{FEATURE_CAMEL}}.delete}/${id}`);
"#;

const SCHEMA: &str = r#"import { z } from "zod";

export const {{FEATURE_CAMEL}}Schema = z.object({
  id: z.string().min(1, "ID is required"),
});

export type {{FEATURE_PASCAL}}Schema = z.infer<typeof {{FEATURE_CAMEL}}Schema>;
"#;

const TYPES: &str = r#"export interface {{FEATURE_PASCAL}} {
  id: string;
}

export type {{FEATURE_PASCAL}}Payload = Omit<{{FEATURE_PASCAL}}, "id">;
"#;

const UTILS: &str = r#"import { {{FEATURE_PASCAL}} } from "../types/{{FEATURE_KEBAB}}.types";

export const {{FEATURE_CAMEL}}Key = (item: {{FEATURE_PASCAL}}) => `{{FEATURE_KEBAB}}-${item.id}`;
"#;

const HOOK: &str = r#"import API from "@/config/api/api";
import useFetchData from "@/hooks/use-fetch-data";
import usePostData from "@/hooks/use-post-data";
import usePutData from "@/hooks/use-put-data";
import useDeleteData from "@/hooks/use-delete-data";
import { IQueryParams } from "@/types";
import {
  get{{FEATURE_PASCAL}},
  create{{FEATURE_PASCAL}},
  update{{FEATURE_PASCAL}},
  delete{{FEATURE_PASCAL}},
} from "../services/{{FEATURE_KEBAB}}.service";

export const useGet{{FEATURE_PASCAL}} = (params?: IQueryParams) =>
  useFetchData({ queryKey: [API.{{FEATURE_CAMEL}}.list, params], queryFn: () => get{{FEATURE_PASCAL}}(params) });

export const useCreate{{FEATURE_PASCAL}} = () =>
  usePostData({ mutationFn: create{{FEATURE_PASCAL}}, refetchQueries: [API.{{FEATURE_CAMEL}}.list] });

export const useUpdate{{FEATURE_PASCAL}} = (id: string) =>
  usePutData({ mutationFn: (payload) => update{{FEATURE_PASCAL}}(id, payload), refetchQueries: [API.{{FEATURE_CAMEL}}.list] });

export const useDelete{{FEATURE_PASCAL}} = (id: string) =>
  useDeleteData({ mutationFn: () => delete{{FEATURE_PASCAL}}(id), refetchQueries: [API.{{FEATURE_CAMEL}}.list] });
"#;

const STORE: &str = r#"import { create } from "zustand";
import { {{FEATURE_PASCAL}} } from "../types/{{FEATURE_KEBAB}}.types";

interface {{FEATURE_PASCAL}}State {
  selected: {{FEATURE_PASCAL}} | null;
  select: (item: {{FEATURE_PASCAL}} | null) => void;
}

export const use{{FEATURE_PASCAL}}Store = create<{{FEATURE_PASCAL}}State>((set) => ({
  selected: null,
  select: (item) => set({ selected: item }),
}));
"#;

const ACTION_FORM: &str = r#"import { useForm } from "react-hook-form";
import { zodResolver } from "@hookform/resolvers/zod";
import { {{FEATURE_CAMEL}}Schema, {{FEATURE_PASCAL}}Schema } from "../schema/{{FEATURE_KEBAB}}.schema";
import { Form } from "@/components/ui/form";
import { Button } from "@/components/ui/button";
import { FormInput } from "@/components/ui/FormInput";

interface Props {
  defaultValues?: {{FEATURE_PASCAL}}Schema;
  onSubmitHandler?: (values: {{FEATURE_PASCAL}}Schema) => void;
}

export function ActionForm({ defaultValues, onSubmitHandler }: Props) {
  const form = useForm<{{FEATURE_PASCAL}}Schema>({
    resolver: zodResolver({{FEATURE_CAMEL}}Schema),
    defaultValues: defaultValues || {
      id: "",
    },
  });

  function onSubmit(values: {{FEATURE_PASCAL}}Schema) {
    onSubmitHandler?.(values);
  }

  return (
    <Form {...form}>
      <form onSubmit={form.handleSubmit(onSubmit)} className="space-y-4">
        <FormInput form={form} name="id" label="ID" placeholder="Enter ID" />
        <Button type="submit">Submit</Button>
      </form>
    </Form>
  );
}
"#;

const SHARED_INPUT: &str = r#"import { Input } from "@/components/ui/input";
import { FormControl, FormField, FormItem, FormLabel, FormMessage } from "@/components/ui/form";

interface FormInputProps {
  form: any;
  name: string;
  label: string;
  placeholder?: string;
}

export function FormInput({ form, name, label, placeholder }: FormInputProps) {
  return (
    <FormField
      control={form.control}
      name={name}
      render={({ field }) => (
        <FormItem>
          <FormLabel>{label}</FormLabel>
          <FormControl>
            <Input placeholder={placeholder || `Enter ${label}`} {...field} />
          </FormControl>
          <FormMessage />
        </FormItem>
      )}
    />
  );
}
"#;
